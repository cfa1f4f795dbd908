//! Monitor CSV export against the filesystem

use censo::error::CensoError;
use censo::monitor::Monitor;
use tempfile::TempDir;

#[test]
fn test_two_entries_produce_three_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("estadisticas.csv");

    let mut monitor = Monitor::new();
    monitor.record("Crear datos", 15.25, 1024);
    monitor.record("Mostrar resumen", 3.5, 0);
    monitor.export_csv(&path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        csv,
        "operacion,tiempo,memoria\nCrear datos,15.250,1024\nMostrar resumen,3.500,0\n"
    );
}

#[test]
fn test_re_export_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("estadisticas.csv");
    std::fs::write(&path, "stale\ncontent\nfrom\nbefore\nmore\n").unwrap();

    let mut monitor = Monitor::new();
    monitor.record("a", 1.0, 1);
    monitor.record("b", 2.0, 2);
    monitor.export_csv(&path).unwrap();
    monitor.export_csv(&path).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(!csv.contains("stale"));
}

#[test]
fn test_empty_monitor_exports_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vacio.csv");

    Monitor::new().export_csv(&path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "operacion,tiempo,memoria\n"
    );
}

#[test]
fn test_unwritable_path_returns_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no").join("such").join("dir.csv");

    let result = Monitor::new().export_csv(&path);
    assert!(matches!(result, Err(CensoError::Io(_))));
}

#[test]
fn test_measured_operation_round_trip() {
    let mut monitor = Monitor::new();
    monitor.start();
    let before = monitor.sample_memory();
    let buffer: Vec<u64> = (0..200_000).collect();
    let elapsed = monitor.stop();
    let delta = monitor.sample_memory() - before;
    monitor.record("reservar", elapsed, delta);

    assert_eq!(buffer.len(), 200_000);
    assert!(monitor.total_time_ms() >= 0.0);
    assert_eq!(monitor.entries()[0].memory_kb, delta);
    assert!(monitor.max_memory_kb() >= 0);
}
