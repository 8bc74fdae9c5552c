//! Runs the full catalog against a small workload and checks the shape of the report.

use std::num::NonZero;

use container_bench::{BenchConfig, Category, Workload, run_catalog};

fn catalog_output(element_count: usize) -> String {
    let config = BenchConfig::new(element_count, NonZero::new(2).unwrap());
    let workload = Workload::generate(config.element_count).unwrap();

    let mut out = Vec::new();
    run_catalog(&workload, &config, &mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
#[cfg_attr(miri, ignore)] // Too slow under Miri.
fn every_line_is_header_or_driver_line() {
    let output = catalog_output(2_000);

    for line in output.lines() {
        let is_header = line.starts_with("# ") && line.ends_with(':');
        let is_driver = line.starts_with("- ") && line.contains(", --- ") && line.ends_with(':');

        assert!(is_header || is_driver, "unexpected line: {line}");
    }
}

#[test]
#[cfg_attr(miri, ignore)] // Too slow under Miri.
fn headers_appear_in_category_order() {
    let output = catalog_output(500);

    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("# ")).collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.header()).collect();

    assert_eq!(headers, expected);
}

#[test]
#[cfg_attr(miri, ignore)] // Too slow under Miri.
fn no_phase_reports_an_error() {
    let output = catalog_output(2_000);

    assert!(!output.contains(" ERR"), "{output}");
}

#[test]
#[cfg_attr(miri, ignore)] // Too slow under Miri.
fn set_and_map_lines_list_every_phase() {
    let output = catalog_output(500);

    let keyed_lines = output
        .lines()
        .filter(|l| l.starts_with("- ") && !l.starts_with("- push_back"));

    let mut count = 0;
    for line in keyed_lines {
        count += 1;

        for phase in ["insert:", "find:", "erase:", "reinsert:"] {
            assert!(line.contains(phase), "{phase} missing from: {line}");
        }
    }

    // Five unordered sets, one ordered set, six unordered maps, one ordered map.
    assert_eq!(count, 13);
}

#[test]
#[cfg_attr(miri, ignore)] // Too slow under Miri.
fn empty_workload_still_reports_every_container() {
    let output = catalog_output(0);

    let driver_lines = output.lines().filter(|l| l.starts_with("- ")).count();

    assert_eq!(driver_lines, 17);
    assert!(!output.contains(" ERR"));
}
