use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "##fileformat=VCFv4.2
##INFO=<ID=RankScore,Number=.,Type=String,Description=\"family_id:rank_score\">
##INFO=<ID=RankResult,Number=.,Type=String,Description=\"'|'-separated list of rank contributions\">
##INFO=<ID=CADD,Number=1,Type=String,Description=\"CADD score\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";

const ROWS: [&str; 3] = [
    "chr1\t100\t.\tA\tG\t50\tPASS\tRankScore=fam:4;RankResult=1|3;CADD=1.5",
    "chr1\t200\t.\tC\tT\t50\tPASS\tRankScore=fam:9;RankResult=4|5",
    "chr2\t300\t.\tG\tA\t50\tPASS\tRankScore=fam:12;RankResult=6|6;CADD=3.5",
];

fn write_vcf(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut text = HEADER.to_string();
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn tool() -> Command {
    Command::cargo_bin("vcf-rank-tools").unwrap()
}

#[test]
fn rankscore_greater() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args(["rankscore", "--comparison", "greater", "--threshold", "5"])
        .arg(&vcf)
        .assert()
        .success()
        .stdout("9.0\n12.0\n");
    Ok(())
}

#[test]
fn rankscore_columns_with_rank_model() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);
    let model = dir.path().join("rank_model.ini");
    fs::write(
        &model,
        "[Categories]\n  [[allele_frequency]]\n  [[protein_prediction]]\n",
    )?;

    tool()
        .args(["rankscore", "-c", "lessorequal", "-t", "9", "--columns", "0,1"])
        .arg("--rank-model")
        .arg(&model)
        .arg(&vcf)
        .assert()
        .success()
        .stdout(
            "#CHROM\tPOS\tRankScore\tallele_frequency\tprotein_prediction\n\
             chr1\t100\t4.0\t1\t3\n\
             chr1\t200\t9.0\t4\t5\n",
        );
    Ok(())
}

#[test]
fn rankscore_head() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args(["rankscore", "--head", "0"])
        .arg(&vcf)
        .assert()
        .success()
        .stdout("4.0\n");
    Ok(())
}

#[test]
fn rankscore_rejects_unknown_mode() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args(["rankscore", "--comparison", "bigger"])
        .arg(&vcf)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid comparison mode"));
    Ok(())
}

#[test]
fn rankscore_malformed_score_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(
        dir.path(),
        "bad.vcf",
        &["chr1\t100\t.\tA\tG\t50\tPASS\tRankScore=xyz"],
    );

    tool()
        .arg("rankscore")
        .arg(&vcf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("RankScore"));
    Ok(())
}

#[test]
fn filter_info_with_normalizer() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args([
            "filter-info",
            "--field",
            "RankResult",
            "--value",
            "4",
            "--comparison",
            "greater",
            "--normalize",
            r#"split("|", 0)"#,
        ])
        .arg(&vcf)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", ROWS[1], ROWS[2]));
    Ok(())
}

#[test]
fn filter_info_debug() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args(["filter-info", "-f", "CADD", "--value", "2", "-c", "less", "--debug"])
        .arg(&vcf)
        .assert()
        .success()
        .stdout("[\"1.5\"]\nNumber missing: 1\n");
    Ok(())
}

#[test]
fn filter_info_bad_normalizer() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let vcf = write_vcf(dir.path(), "ranked.vcf", &ROWS);

    tool()
        .args(["filter-info", "-f", "CADD", "--value", "2", "-c", "equal"])
        .args(["--normalize", "reverse()"])
        .arg(&vcf)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Normalizer parse error"));
    Ok(())
}

#[test]
fn diff_counts_and_records() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let extra = "chr3\t400\t.\tT\tC\t50\tPASS\tRankScore=fam:1";
    let a = write_vcf(dir.path(), "a.vcf", &ROWS);
    let b = write_vcf(dir.path(), "b.vcf", &[ROWS[1], ROWS[2], extra]);

    tool()
        .arg("diff")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("1 only in VCF1, 1 only in VCF2\n");

    tool()
        .args(["diff", "--print-records"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(format!("vcf1\t{}\nvcf2\t{}\n", ROWS[0], extra));
    Ok(())
}

#[test]
fn diff_reads_gzipped_input() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let plain = write_vcf(dir.path(), "plain.vcf", &ROWS);
    let gzipped = dir.path().join("ranked.vcf.gz");
    {
        let mut writer = niffler::get_writer(
            Box::new(fs::File::create(&gzipped)?),
            niffler::compression::Format::Gzip,
            niffler::Level::Six,
        )?;
        writer.write_all(&fs::read(&plain)?)?;
    }

    tool()
        .arg("diff")
        .arg(&plain)
        .arg(&gzipped)
        .assert()
        .success()
        .stdout("0 only in VCF1, 0 only in VCF2\n");
    Ok(())
}

#[test]
fn reads_stdin() -> Result<(), Box<dyn Error>> {
    let mut text = HEADER.to_string();
    for row in ROWS {
        text.push_str(row);
        text.push('\n');
    }

    tool()
        .args(["rankscore", "-c", "equal", "-t", "12", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout("12.0\n");
    Ok(())
}

#[test]
fn missing_file_fails() {
    tool()
        .args(["diff", "/nonexistent/a.vcf", "/nonexistent/b.vcf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to diff"));
}
