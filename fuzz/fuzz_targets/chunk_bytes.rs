#![no_main]

use libfuzzer_sys::fuzz_target;
use magicchunk::{Chunker, FileHandle, Pipeline, hash_exact, hash_sampled};

fuzz_target!(|data: Vec<u8>| {
    for chunk_size in [1, 7, 64, 4096, magicchunk::DEFAULT_CHUNK_SIZE] {
        let chunker = Chunker::new(chunk_size);
        let chunks = chunker.chunk_bytes(data.clone());

        // Verify: count is ceil(size / chunk_size)
        assert_eq!(chunks.len() as u64, chunker.chunk_count(data.len() as u64));

        // Verify: every chunk but the last is full
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(chunk.len() <= chunk_size);
            if i + 1 < chunks.len() {
                assert_eq!(chunk.len(), chunk_size);
            }
        }

        // Verify: offsets are contiguous and cover the input
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.index, expected_offset);
            expected_offset += chunk.len() as u64;
        }
        assert_eq!(expected_offset, data.len() as u64);

        // Verify: the reader path agrees
        let from_reader: Vec<_> = chunker
            .chunk(&data[..])
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chunks, from_reader);
    }

    // Verify: hashes are deterministic
    assert_eq!(hash_exact(&data), hash_exact(&data));
    assert_eq!(hash_sampled(&data), hash_sampled(&data));

    // Verify: the pipeline never panics and rejects only empty input by default
    let outcome = Pipeline::new().process_file(&FileHandle::new("fuzz.bin", data.clone()), None);
    assert_eq!(outcome.is_chunked(), !data.is_empty());
});
