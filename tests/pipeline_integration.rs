//! End-to-end pipeline tests over real files
//!
//! Runs the junction-to-intron conversion, best-intron selection,
//! comparison report and margin extraction against temp-file inputs.

use intronscan::core::io::{create_output, finish};
use intronscan::core::{compare_best_introns, extend_introns, flank_windows};
use intronscan::formats::{choose_best_introns, intron_stats, junctions_to_introns, read_introns};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_junctions_to_best_introns_pipeline() {
    let dir = TempDir::new().unwrap();

    // Three junctions on s1 (two overlapping after block adjustment, one
    // disjoint) and one on s2, deliberately out of order.
    let junctions = write_file(
        &dir,
        "junctions.bed",
        concat!(
            "track name=junctions\n",
            "s2\t900\t1900\tj4\t8\t+\t900\t1900\t255,0,0\t2\t10,10\t0,990\n",
            "s1\t140\t1260\tj2\t20\t+\t140\t1260\t255,0,0\t2\t10,10\t0,1110\n",
            "s1\t90\t1210\tj1\t10\t+\t90\t1210\t255,0,0\t2\t10,10\t0,1110\n",
            "s1\t1990\t2910\tj3\t3\t-\t1990\t2910\t255,0,0\t2\t10,10\t0,910\n",
        ),
    );

    let introns_path = dir.path().join("introns.bed");
    let mut writer = create_output(&introns_path).unwrap();
    let registry = junctions_to_introns(&junctions, &mut writer).unwrap();
    finish(writer).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        fs::read_to_string(&introns_path).unwrap(),
        "s1\t100\t1200\t10\ns1\t150\t1250\t20\ns1\t2000\t2900\t3\ns2\t910\t1890\t8\n"
    );

    // Selection with cutoff 5: j3 (support 3) stays in the all registry but
    // cannot win; j2 beats j1 in the overlapping run.
    let best_path = dir.path().join("best.bed");
    let selection = choose_best_introns(&introns_path, &best_path, 5.0).unwrap();
    assert_eq!(selection.all_count(), 4);
    assert_eq!(selection.best_count(), 2);
    assert_eq!(
        fs::read_to_string(&best_path).unwrap(),
        "s1\t150\t1250\t20\ns2\t910\t1890\t8\n"
    );

    let report = compare_best_introns(&selection).unwrap();
    assert_eq!(report.winners, 2);
    // s1 winner shares its overlap group with j1: 20/30; s2 winner is alone.
    let expected_mean = (20.0 / 30.0 + 1.0) / 2.0;
    assert!((report.mean_share - expected_mean).abs() < 1e-12);
    assert!((report.global_share - 28.0 / 41.0).abs() < 1e-12);
    assert!((report.mean_best_support - 14.0).abs() < 1e-12);
}

#[test]
fn test_stats_over_converted_introns() {
    let dir = TempDir::new().unwrap();
    let introns_path = write_file(
        &dir,
        "introns.bed",
        "s1\t100\t200\t4\ns1\t300\t400\t6\ns1\t500\t600\t20\n",
    );
    let introns = read_introns(&introns_path).unwrap();
    let stats = intron_stats(&introns).unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.mean_support - 10.0).abs() < 1e-12);
    assert!((stats.median_support - 6.0).abs() < 1e-12);
}

#[test]
fn test_margin_outputs() {
    let dir = TempDir::new().unwrap();
    let introns_path = write_file(&dir, "best.bed", "s1\t100\t200\t10\ns1\t300\t400\t5\n");
    let introns = read_introns(&introns_path).unwrap();

    let widened_path = dir.path().join("widened.bed");
    let mut writer = create_output(&widened_path).unwrap();
    extend_introns(&introns, 25, &mut writer).unwrap();
    finish(writer).unwrap();
    assert_eq!(
        fs::read_to_string(&widened_path).unwrap(),
        "s1\t75\t225\ns1\t275\t425\n"
    );

    let starts_path = dir.path().join("starts.bed");
    let ends_path = dir.path().join("ends.bed");
    let mut start_writer = create_output(&starts_path).unwrap();
    let mut end_writer = create_output(&ends_path).unwrap();
    flank_windows(&introns, 50, 3, &mut start_writer, &mut end_writer).unwrap();
    finish(start_writer).unwrap();
    finish(end_writer).unwrap();
    assert_eq!(
        fs::read_to_string(&starts_path).unwrap(),
        "s1\t50\t103\ns1\t250\t303\n"
    );
    assert_eq!(
        fs::read_to_string(&ends_path).unwrap(),
        "s1\t197\t250\ns1\t397\t450\n"
    );
}

#[test]
fn test_zero_support_winner_fails_comparison() {
    use intronscan::core::CompareError;

    // With cutoff 0 a zero-support intron can still win its run; its
    // overlap group then sums to zero, which the reporter must reject
    // rather than divide through.
    let dir = TempDir::new().unwrap();
    let introns_path = write_file(&dir, "introns.bed", "s1\t100\t200\t0\n");
    let best_path = dir.path().join("best.bed");

    let selection = choose_best_introns(&introns_path, &best_path, 0.0).unwrap();
    assert_eq!(selection.best_count(), 1);
    assert!(matches!(
        compare_best_introns(&selection),
        Err(CompareError::DegenerateOverlap { .. })
    ));
}

#[test]
fn test_empty_junction_file_produces_empty_outputs() {
    let dir = TempDir::new().unwrap();
    let junctions = write_file(&dir, "junctions.bed", "");
    let introns_path = dir.path().join("introns.bed");

    let mut writer = create_output(&introns_path).unwrap();
    let registry = junctions_to_introns(&junctions, &mut writer).unwrap();
    finish(writer).unwrap();
    assert!(registry.is_empty());
    assert_eq!(fs::read_to_string(&introns_path).unwrap(), "");

    // Selection over the empty canonical file emits nothing either.
    let best_path = dir.path().join("best.bed");
    let selection = choose_best_introns(&introns_path, &best_path, 5.0).unwrap();
    assert_eq!(selection.all_count(), 0);
    assert_eq!(selection.best_count(), 0);
    assert_eq!(fs::read_to_string(&best_path).unwrap(), "");
}

#[test]
fn test_gzipped_junction_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = TempDir::new().unwrap();
    let gz_path = dir.path().join("junctions.bed.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path).unwrap(), Compression::default());
    encoder
        .write_all(b"s1\t90\t1210\tj1\t10\t+\t90\t1210\t255,0,0\t2\t10,10\t0,1110\n")
        .unwrap();
    encoder.finish().unwrap();

    let mut out = Vec::new();
    let registry = junctions_to_introns(&gz_path, &mut out).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "s1\t100\t1200\t10\n");
}

#[test]
fn test_malformed_junction_aborts_conversion() {
    let dir = TempDir::new().unwrap();
    let junctions = write_file(
        &dir,
        "junctions.bed",
        "s1\t90\t1210\tj1\t10\t+\t90\t1210\t255,0,0\t2\t10\t0,1110\n",
    );
    let mut out = Vec::new();
    assert!(junctions_to_introns(&junctions, &mut out).is_err());
}
