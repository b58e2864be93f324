// Integration tests for the async readers
// Tests cover: agreement with the sync API, real files through tokio compat

#![cfg(feature = "async-io")]

use std::path::PathBuf;

use futures_util::StreamExt;
use magicchunk::{
    Chunker, ConfigOverride, Pipeline, chunk_async, hash_exact, hash_exact_async, hash_sampled,
    hash_sampled_async, read_as_byte_hex, read_file,
};
use tokio_util::compat::TokioAsyncReadCompatExt;

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 13) as u8).collect()
}

/// Writes `data` to a per-process temp file and returns its path.
async fn temp_file(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("magicchunk-{}-{name}", std::process::id()));
    tokio::fs::write(&path, data).await.unwrap();
    path
}

#[tokio::test]
async fn test_stream_matches_sync_chunker() {
    let data = pattern(100_000);
    let expected = Chunker::new(4096).chunk_bytes(data.clone());

    let chunks: Vec<_> = chunk_async(&data[..], 4096)
        .map(|c| c.unwrap())
        .collect::<Vec<_>>()
        .await;

    assert_eq!(chunks, expected);
}

#[tokio::test]
async fn test_stream_from_file() {
    let data = pattern(3 * 1024 * 1024 / 2);
    let path = temp_file("stream.bin", &data).await;

    let file = tokio::fs::File::open(&path).await.unwrap();
    let offsets: Vec<u64> = chunk_async(file.compat(), 512 * 1024)
        .map(|c| c.unwrap().index)
        .collect::<Vec<_>>()
        .await;

    assert_eq!(offsets, vec![0, 524_288, 1_048_576]);
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_sampled_hash_from_file() {
    let data = pattern(5 * 1024 * 1024 + 123);
    let path = temp_file("sampled.bin", &data).await;

    let file = tokio::fs::File::open(&path).await.unwrap();
    let hash = hash_sampled_async(file.compat(), data.len() as u64)
        .await
        .unwrap();

    assert_eq!(hash, hash_sampled(&data));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_exact_hash_from_file() {
    let data = pattern(200_001);
    let path = temp_file("exact.bin", &data).await;

    let file = tokio::fs::File::open(&path).await.unwrap();
    let hash = hash_exact_async(file.compat()).await.unwrap();

    assert_eq!(hash, hash_exact(&data));
    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test]
async fn test_process_reader_fixes_suffix() {
    let pipeline = Pipeline::new();
    let strict = ConfigOverride::new()
        .ignore_unmatch_suffix(false)
        .auto_fix_suffix(true);

    let outcome = pipeline
        .process_reader("upload.dat", &b"GIF89a\x01\x00\x01\x00"[..], Some(&strict))
        .await
        .unwrap();

    assert_eq!(outcome.file().unwrap().name(), "upload.gif");
}

#[test]
fn test_readers_without_runtime() {
    let hex = tokio_test::block_on(read_as_byte_hex(&b"PK\x03\x04"[..])).unwrap();
    assert_eq!(hex.as_str(), "50 4B 03 04");

    let file = tokio_test::block_on(read_file("a.zip", &b"PK\x03\x04"[..])).unwrap();
    assert!(Pipeline::new().match_type(&file).is_match);
}
