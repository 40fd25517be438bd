use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use rand::seq::SliceRandom;

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// A fresh directory, so that chunk files of one test can be told apart from another's
#[allow(dead_code)]
pub fn temp_dir(dir: &str) -> PathBuf {
    let result = temp_file_name(dir);
    fs::create_dir_all(&result).unwrap_or_else(|_|
        panic!("Failed to create directory: {:?}", result)
    );
    result
}

/// Write `count` distinct lines, each repeated `copies` times, in random order
#[allow(dead_code)]
pub fn write_shuffled(path: &PathBuf, count: usize, copies: usize) -> Result<Vec<String>, anyhow::Error> {
    let distinct: Vec<String> = (0..count).map(|i| format!("line-{:05}", i)).collect();
    let mut lines: Vec<&String> = distinct.iter().flat_map(|l| std::iter::repeat(l).take(copies)).collect();
    lines.shuffle(&mut rand::thread_rng());

    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(distinct)
}

#[allow(dead_code)]
pub fn dir_entries(dir: &PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names)
}
