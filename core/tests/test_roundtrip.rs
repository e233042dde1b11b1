// decompress(compress(F)) == F for files on disk: empty, single byte, large,
// plus a property check over small arbitrary inputs.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use proptest::prelude::*;

    use gzpipe_core::compression::CodecStage;
    use gzpipe_core::stream::{compress_file, decompress_file, run_pipeline, PipelineConfig};
    use gzpipe_core::types::Mode;
    use gzpipe_core::utils::{format_file_size, percent_saved};

    fn roundtrip_file(contents: &[u8]) {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("input.dat");
        fs::write(&src, contents).unwrap();
        let config = PipelineConfig::default();

        let packed = compress_file(Some(&src), &config).expect("compress");
        fs::remove_file(&src).unwrap();

        let unpacked = decompress_file(Some(&packed.destination.path), &config).expect("decompress");
        assert_eq!(unpacked.destination.path, src);
        assert_eq!(fs::read(&src).unwrap(), contents);
    }

    #[test]
    fn roundtrip_empty_file() {
        roundtrip_file(b"");
    }

    #[test]
    fn roundtrip_single_byte() {
        roundtrip_file(b"\x00");
    }

    #[test]
    fn roundtrip_ten_megabytes() {
        // Mixed content: compressible runs interleaved with a counter pattern.
        let data: Vec<u8> = (0..10 * 1024 * 1024 + 17)
            .map(|i: usize| if (i / 4096) % 2 == 0 { b'r' } else { (i.wrapping_mul(31) >> 3) as u8 })
            .collect();
        roundtrip_file(&data);
    }

    #[test]
    fn large_file_telemetry_shows_chunked_reads() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("big.bin");
        fs::write(&src, vec![7u8; 3 * 1024 * 1024]).unwrap();

        let config = PipelineConfig::default();
        let report = compress_file(Some(&src), &config).unwrap();
        assert!(report.telemetry.chunks_read > 1);
        assert_eq!(report.telemetry.bytes_read, 3 * 1024 * 1024);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn in_memory_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..20_000)) {
            let config = PipelineConfig::new(Some(4096), Some(1));

            let mut packed = Vec::new();
            run_pipeline(Cursor::new(&data), &mut packed, CodecStage::gzip(Mode::Compress), &config).unwrap();

            let mut unpacked = Vec::new();
            run_pipeline(Cursor::new(&packed), &mut unpacked, CodecStage::gzip(Mode::Decompress), &config).unwrap();

            prop_assert_eq!(unpacked, data);
        }

        #[test]
        fn size_label_approximates_the_byte_count(bytes in 1u64..(1u64 << 40)) {
            let label = format_file_size(bytes);
            let (value, unit) = label.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            let exp = ["Bytes", "KB", "MB", "GB"].iter().position(|u| *u == unit).unwrap();

            let approx = value * 1024f64.powi(exp as i32);
            let tolerance = 0.0051 * 1024f64.powi(exp as i32);
            prop_assert!((approx - bytes as f64).abs() <= tolerance, "{bytes} -> {label}");
            prop_assert!(value >= 1.0);
        }

        #[test]
        fn saving_is_positive_iff_output_shrank(original in 1u64..1_000_000, result in 0u64..1_000_000) {
            let saved = percent_saved(original, result).unwrap();
            if result * 10_000 < original {
                prop_assert!(saved > 99.0);
            }
            if result > original {
                prop_assert!(saved <= 0.0);
            }
            if result == original {
                prop_assert_eq!(saved, 0.0);
            }
        }
    }
}
