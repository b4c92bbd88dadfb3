use search_capture::{CaptureConfig, capture_search};
use tempfile::TempDir;

#[tokio::test]
#[ignore] // Requires browser installation
async fn test_capture_google_keyboard() {
    let temp_dir = TempDir::new().unwrap();
    let config = CaptureConfig::builder()
        .query("keyboard")
        .output_path(temp_dir.path().join("search_results.txt"))
        .build()
        .unwrap();

    let results = capture_search(&config).await.unwrap();
    assert!(!results.is_empty());
    assert!(results.len() <= 10);

    let content = std::fs::read_to_string(config.output_path()).unwrap();
    assert_eq!(content.lines().count(), results.len());
}
