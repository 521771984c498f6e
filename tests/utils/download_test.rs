use actix_web::{web, App, HttpResponse};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use vision_setup::utils::download::{Downloader, ModelDownloader};
use vision_setup::utils::progress::{DownloadProgress, NoProgress, ProgressSink};

const BODY_LEN: usize = 100;

#[derive(Default)]
struct RecordingProgress {
    updates: Mutex<Vec<DownloadProgress>>,
    finished: Mutex<Option<DownloadProgress>>,
}

impl ProgressSink for RecordingProgress {
    fn update(&self, progress: &DownloadProgress) {
        self.updates.lock().unwrap().push(progress.clone());
    }

    fn finish(&self, progress: &DownloadProgress) {
        *self.finished.lock().unwrap() = Some(progress.clone());
    }
}

fn weights_server() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new()
            .route(
                "/weights/{name}",
                web::get().to(|| async { HttpResponse::Ok().body(vec![7u8; BODY_LEN]) }),
            )
            .route(
                "/chunked/{name}",
                web::get().to(|| async {
                    let parts = (0..3).map(|_| {
                        Ok::<_, std::io::Error>(web::Bytes::from(vec![1u8; BODY_LEN]))
                    });
                    HttpResponse::Ok().streaming(futures_util::stream::iter(parts))
                }),
            )
            .route(
                "/broken/{name}",
                web::get().to(|| async {
                    let parts = vec![
                        Ok(web::Bytes::from(vec![1u8; BODY_LEN])),
                        Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset")),
                    ];
                    HttpResponse::Ok().streaming(futures_util::stream::iter(parts))
                }),
            )
    })
}

fn quiet_downloader() -> ModelDownloader {
    ModelDownloader::default().with_progress(Arc::new(NoProgress))
}

#[actix_web::test]
async fn test_download_matches_content_length() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("yolov5s.pt");

    let ok = quiet_downloader().download(&srv.url("/weights/yolov5s.pt"), &destination).await;

    assert!(ok);
    assert_eq!(fs::metadata(&destination).unwrap().len(), BODY_LEN as u64);
    assert!(fs::read(&destination).unwrap().iter().all(|b| *b == 7));
}

#[actix_web::test]
async fn test_progress_is_reported_per_chunk() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingProgress::default());
    let downloader = ModelDownloader::new(32, None).unwrap().with_progress(sink.clone());

    let written = downloader
        .try_download(&srv.url("/weights/yolov5m.pt"), &dir.path().join("yolov5m.pt"))
        .await
        .unwrap();

    assert_eq!(written, BODY_LEN as u64);
    let updates = sink.updates.lock().unwrap();
    assert!(updates.len() >= 4);
    assert!(updates.iter().all(|p| p.total == BODY_LEN as u64 && p.label == "yolov5m.pt"));
    assert!(updates.windows(2).all(|w| w[1].downloaded - w[0].downloaded <= 32));
    let finished = sink.finished.lock().unwrap().clone().unwrap();
    assert_eq!(finished.downloaded, BODY_LEN as u64);
    assert_eq!(finished.percent(), Some(100.0));
}

#[actix_web::test]
async fn test_unknown_length_counts_from_zero_total() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingProgress::default());
    let downloader = ModelDownloader::default().with_progress(sink.clone());
    let destination = dir.path().join("stream.pt");

    assert!(downloader.download(&srv.url("/chunked/stream.pt"), &destination).await);

    assert_eq!(fs::metadata(&destination).unwrap().len(), 3 * BODY_LEN as u64);
    let finished = sink.finished.lock().unwrap().clone().unwrap();
    assert_eq!(finished.total, 0);
    assert_eq!(finished.downloaded, 3 * BODY_LEN as u64);
}

#[actix_web::test]
async fn test_http_error_status_returns_false() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("missing.pt");

    let ok = quiet_downloader().download(&srv.url("/missing.pt"), &destination).await;

    assert!(!ok);
    assert!(!destination.exists());
}

#[actix_web::test]
async fn test_unreachable_host_returns_false() {
    let dir = TempDir::new().unwrap();

    let ok = quiet_downloader()
        .download("http://127.0.0.1:9/yolov5s.pt", &dir.path().join("yolov5s.pt"))
        .await;

    assert!(!ok);
}

#[actix_web::test]
async fn test_missing_parent_directory_returns_false() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let destination = dir.path().join("models/yolo/yolov5l.pt");

    let ok = quiet_downloader().download(&srv.url("/weights/yolov5l.pt"), &destination).await;

    assert!(!ok);
    assert!(!dir.path().join("models").exists());
}

#[actix_web::test]
async fn test_progress_line_is_finished_when_stream_breaks() {
    let srv = weights_server();
    let dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingProgress::default());
    let downloader = ModelDownloader::default().with_progress(sink.clone());
    let destination = dir.path().join("yolov5l.pt");

    let ok = downloader.download(&srv.url("/broken/yolov5l.pt"), &destination).await;

    assert!(!ok);
    let finished = sink.finished.lock().unwrap().clone().unwrap();
    assert_eq!(finished.label, "yolov5l.pt");
    assert!(finished.downloaded < 2 * BODY_LEN as u64);
}
