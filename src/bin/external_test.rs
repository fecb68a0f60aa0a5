use regex::Regex;
use std::collections::VecDeque;
use std::error::Error;
use std::fs;
use std::process::Command;

const LOXLEX_PATH: &str = "./target/debug/loxlex";
const TEST_DIR: &str = "./test";

struct Expectations<'a> {
    lines: VecDeque<&'a str>,
    exit_code: i32,
}

fn parse_expectations<'a>(
    contents: &'a str,
    expect_regex: &Regex,
    exit_regex: &Regex,
) -> Result<Expectations<'a>, Box<dyn Error>> {
    let mut expectations = Expectations {
        lines: VecDeque::new(),
        exit_code: 0,
    };

    for line in contents.lines() {
        if let Some(captures) = exit_regex.captures(line) {
            if let Some(code) = captures.get(1) {
                expectations.exit_code = code.as_str().parse()?;
            }
        } else if let Some(captures) = expect_regex.captures(line) {
            if let Some(expected_value) = captures.get(1) {
                expectations.lines.push_back(expected_value.as_str());
            }
        }
    }

    Ok(expectations)
}

fn main() -> Result<(), Box<dyn Error>> {
    let expect_regex = Regex::new("// expect: (.*)")?;
    let exit_regex = Regex::new(r"// expect exit: (\d+)")?;
    let mut failures = 0;

    let mut test_files = fs::read_dir(TEST_DIR)?.collect::<Result<Vec<_>, _>>()?;
    test_files.sort_by_key(|entry| entry.file_name());

    for test_file in test_files {
        let test_name = test_file.file_name().to_string_lossy().into_owned();
        print!("Running test: {} ... ", test_name);
        let contents = fs::read_to_string(test_file.path())?;
        let mut expectations = parse_expectations(&contents, &expect_regex, &exit_regex)?;

        let output = Command::new(LOXLEX_PATH).arg(test_file.path()).output()?;
        let stdout = String::from_utf8(output.stdout)?;
        let mut failed_expectations = Vec::new();
        for line in stdout.lines() {
            match expectations.lines.pop_front() {
                Some(expected) if expected == line => (),
                Some(expected) => {
                    failed_expectations.push(format!("Expected: {}, Actual: {}", expected, line))
                }
                None => failed_expectations.push(format!("Unexpected output: {}", line)),
            }
        }

        let exit_code = output.status.code().unwrap_or(-1);
        if exit_code != expectations.exit_code {
            failed_expectations.push(format!(
                "Expected exit code {}, got {}",
                expectations.exit_code, exit_code
            ));
        }

        if failed_expectations.is_empty() && expectations.lines.is_empty() {
            println!("pass!");
        } else {
            failures += 1;
            println!("\x1b[0;31mfail!\x1b[0m");
            for failure in failed_expectations {
                println!("{}", failure);
            }
            for missed_expectation in expectations.lines {
                println!("Expected, not found: {}", missed_expectation);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} test(s) failed", failures).into());
    }

    Ok(())
}
