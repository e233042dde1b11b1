#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use gzpipe_core::{
        artifact::NamingNotice,
        stream::{check_source, compress_file, decompress_file, prepare, run, PipelineConfig},
        types::{Mode, PipelineError},
        utils::round2,
    };

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    fn write(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let p = dir.join(name);
        fs::write(&p, bytes).unwrap();
        p
    }

    // --- Source checks ---

    #[test]
    fn missing_argument_is_input_missing() {
        assert!(matches!(compress_file(None, &config()), Err(PipelineError::InputMissing)));
        assert!(matches!(decompress_file(None, &config()), Err(PipelineError::InputMissing)));
    }

    #[test]
    fn missing_source_has_no_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = dir.path().join("ghost.txt");

        let err = compress_file(Some(&ghost), &config()).unwrap_err();
        assert!(matches!(err, PipelineError::SourceNotFound { .. }));
        assert!(!dir.path().join("ghost.txt.gz").exists());
    }

    #[test]
    fn directory_source_is_rejected_up_front() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_source(Some(dir.path())).unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnreadable(_)));
    }

    #[test]
    fn invalid_config_creates_no_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "a.txt", b"abc");
        let bad = PipelineConfig::new(None, Some(0));

        let err = compress_file(Some(&src), &bad).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
        assert!(!dir.path().join("a.txt.gz").exists());
    }

    // --- Concrete scenario ---

    #[test]
    fn thousand_a_bytes_compress_and_restore() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "aaaa.txt", &[b'a'; 1000]);

        let report = compress_file(Some(&src), &config()).unwrap();
        let gz = dir.path().join("aaaa.txt.gz");
        assert_eq!(report.destination.path, gz);
        assert!(report.summary.result_bytes < 1000);
        assert!(report.summary.ratio.unwrap() > 0.0);

        // Remove the original so decompression restores it in place.
        fs::remove_file(&src).unwrap();
        let report = decompress_file(Some(&gz), &config()).unwrap();
        assert_eq!(report.destination.path, src);
        assert_eq!(fs::read(&src).unwrap(), vec![b'a'; 1000]);
        assert_eq!(report.summary.result_bytes, 1000);
        assert_eq!(report.summary.ratio, None);
    }

    #[test]
    fn ratio_matches_stat_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let text = b"the quick brown fox jumps over the lazy dog\n".repeat(500);
        let src = write(dir.path(), "fox.txt", &text);

        let report = compress_file(Some(&src), &config()).unwrap();
        let original = fs::metadata(&src).unwrap().len();
        let compressed = fs::metadata(&report.destination.path).unwrap().len();

        assert_eq!(report.summary.original_bytes, original);
        assert_eq!(report.summary.result_bytes, compressed);
        let expected = round2((1.0 - compressed as f64 / original as f64) * 100.0);
        assert_eq!(report.summary.ratio, Some(expected));
    }

    #[test]
    fn empty_source_ratio_is_undefined() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "empty.txt", b"");

        let report = compress_file(Some(&src), &config()).unwrap();
        assert_eq!(report.summary.original_bytes, 0);
        assert!(report.summary.result_bytes > 0);
        assert_eq!(report.summary.ratio, None);
        assert_eq!(report.summary.ratio_display(), "N/A");
    }

    // --- Naming ---

    #[test]
    fn compress_overwrites_existing_gz_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "log.txt", b"fresh contents");
        let gz = write(dir.path(), "log.txt.gz", b"stale");

        let prepared = prepare(Some(&src), Mode::Compress).unwrap();
        assert_eq!(prepared.destination.notices, vec![NamingNotice::Overwrite { path: gz.clone() }]);

        prepared.execute(&config()).unwrap();
        assert_ne!(fs::read(&gz).unwrap(), b"stale");
    }

    #[test]
    fn decompress_never_overwrites_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "report.txt", b"quarterly numbers");
        compress_file(Some(&src), &config()).unwrap();
        fs::write(&src, b"edited since").unwrap();

        let gz = dir.path().join("report.txt.gz");
        let report = decompress_file(Some(&gz), &config()).unwrap();

        assert_eq!(report.destination.path, dir.path().join("report.txt.decompressed"));
        assert_eq!(fs::read(&src).unwrap(), b"edited since");
        assert_eq!(fs::read(&report.destination.path).unwrap(), b"quarterly numbers");
    }

    #[test]
    fn decompress_without_extension_still_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "payload.bin", b"renamed archive");
        let report = compress_file(Some(&src), &config()).unwrap();

        let renamed = dir.path().join("archive");
        fs::rename(&report.destination.path, &renamed).unwrap();

        let report = decompress_file(Some(&renamed), &config()).unwrap();
        assert_eq!(report.destination.path, dir.path().join("archive.decompressed"));
        assert!(matches!(report.destination.notices[0], NamingNotice::MissingExtension { .. }));
        assert_eq!(fs::read(&report.destination.path).unwrap(), b"renamed archive");
    }

    #[test]
    fn decompress_accepts_zlib_wrapped_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let mut enc = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::best());
        enc.write_all(&b"deflated with a zlib header\n".repeat(100)).unwrap();
        let src = write(dir.path(), "data.gz", &enc.finish().unwrap());

        let report = decompress_file(Some(&src), &config()).unwrap();
        assert_eq!(report.destination.path, dir.path().join("data"));
        assert_eq!(fs::read(dir.path().join("data")).unwrap(), b"deflated with a zlib header\n".repeat(100));
    }

    // --- Failures ---

    #[test]
    fn corrupt_gz_is_a_codec_error_and_leaves_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let fake = write(dir.path(), "notes.txt.gz", b"plain text wearing a .gz name\n");

        let err = decompress_file(Some(&fake), &config()).unwrap_err();
        assert!(err.is_corrupt_input(), "got {err}");
        assert!(err.leaves_partial_output());
        // Destination was created before the codec failed; it is not cleaned up.
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn run_refuses_identical_paths() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "same.txt", b"abc");

        let err = run(&src, &src, Mode::Compress, &config()).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
        assert_eq!(fs::read(&src).unwrap(), b"abc");
    }

    #[test]
    fn unwritable_destination_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src = write(dir.path(), "in.txt", b"abc");
        let dest = dir.path().join("no-such-dir").join("out.gz");

        let err = run(&src, &dest, Mode::Compress, &config()).unwrap_err();
        assert!(matches!(err, PipelineError::DestinationUnwritable(_)));
    }
}
