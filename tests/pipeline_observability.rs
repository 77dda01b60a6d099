use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use csv_data_cleaning::pipeline::{
    CompositeObserver, FileObserver, PipelineContext, PipelineObserver, PipelineOptions,
    PipelineSeverity, PipelineStage, PipelineStats, clean_csv_file,
};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<PipelineStats>>,
    failures: Mutex<Vec<(PipelineStage, PipelineSeverity)>>,
    alerts: Mutex<Vec<PipelineSeverity>>,
}

impl PipelineObserver for RecordingObserver {
    fn on_success(&self, _ctx: &PipelineContext, stats: PipelineStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(
        &self,
        _ctx: &PipelineContext,
        stage: PipelineStage,
        severity: PipelineSeverity,
        _error: &csv_data_cleaning::PipelineError,
    ) {
        self.failures.lock().unwrap().push((stage, severity));
    }

    fn on_alert(
        &self,
        _ctx: &PipelineContext,
        _stage: PipelineStage,
        severity: PipelineSeverity,
        _error: &csv_data_cleaning::PipelineError,
    ) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("csv-data-cleaning-observability-{nanos}.{ext}"))
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = PipelineOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: PipelineSeverity::Critical,
    };

    // Missing input file -> Io error -> Critical
    let output = tmp_file("csv");
    let _ = clean_csv_file("tests/fixtures/does_not_exist.csv", &output, &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(
        failures,
        vec![(PipelineStage::Load, PipelineSeverity::Critical)]
    );
    assert_eq!(alerts, vec![PipelineSeverity::Critical]);
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_without_alert_for_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = PipelineOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: PipelineSeverity::Critical,
    };

    // Inconsistent field counts -> Error severity (not Critical) -> should not alert
    let input = tmp_file("csv");
    std::fs::write(&input, "a,b\n1,2\n3\n").unwrap();
    let output = tmp_file("csv");
    let _ = clean_csv_file(&input, &output, &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![(PipelineStage::Load, PipelineSeverity::Error)]);
    assert!(obs.alerts.lock().unwrap().is_empty());

    let _ = std::fs::remove_file(&input);
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = PipelineOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: PipelineSeverity::Critical,
    };

    let input = tmp_file("csv");
    std::fs::write(&input, "a,b\n1,\n,2\n").unwrap();
    let output = tmp_file("csv");
    let stats = clean_csv_file(&input, &output, &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![stats]);
    assert_eq!(
        successes[0],
        PipelineStats {
            rows: 2,
            columns: 2,
            cells_filled: 2,
        }
    );
    assert!(obs.failures.lock().unwrap().is_empty());

    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn composite_observer_fans_out_to_file_observer() {
    let recording = Arc::new(RecordingObserver::default());
    let recording_trait: Arc<dyn PipelineObserver> = recording.clone();
    let log_path = tmp_file("log");
    let composite = CompositeObserver::new(vec![
        recording_trait,
        Arc::new(FileObserver::new(&log_path)),
    ]);
    let opts = PipelineOptions {
        observer: Some(Arc::new(composite)),
        alert_at_or_above: PipelineSeverity::Critical,
    };

    let output = tmp_file("csv");
    let _ = clean_csv_file("tests/fixtures/does_not_exist.csv", &output, &opts).unwrap_err();

    assert_eq!(recording.failures.lock().unwrap().len(), 1);

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("fail severity=Critical stage=Load"));
    assert!(log.contains("ALERT severity=Critical stage=Load"));

    let _ = std::fs::remove_file(&log_path);
}
