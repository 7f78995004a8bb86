/// Property-based tests using proptest
/// Tests invariants and properties that should hold for all inputs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;
use rust_license_scan::image_source::ImageSource;

// Property: input classification should never panic
proptest! {
    #[test]
    fn detect_never_panics(input in "\\PC*") {
        let _ = ImageSource::detect(&input);
    }

    #[test]
    fn http_urls_are_always_remote(
        host in "[a-z]{1,12}",
        segment in "[a-z0-9]{0,16}"
    ) {
        let url = format!("https://{}.example.com/{}", host, segment);
        prop_assert_eq!(ImageSource::detect(&url), ImageSource::Url(url.clone()));
    }

    #[test]
    fn scheme_free_inputs_are_always_paths(input in "[a-zA-Z0-9_./ -]{1,40}") {
        // No scheme separator anywhere in the pattern, must classify as a file
        prop_assert!(matches!(ImageSource::detect(&input), ImageSource::Path(_)));
    }
}

// Property: URL resolution is the identity function
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn url_resolution_is_identity(url in "https://[a-z]{1,12}\\.com/[a-z0-9]{0,16}\\.jpg") {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let resolved = rt.block_on(ImageSource::url(&url).resolve()).unwrap();
        prop_assert_eq!(resolved, url);
    }

    // Property: encoding a file always yields the jpeg data URI prefix and
    // the suffix decodes back to the original bytes
    #[test]
    fn file_encoding_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("license.jpg");
        std::fs::write(&path, &bytes).unwrap();

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let uri = rt.block_on(ImageSource::path(&path).resolve()).unwrap();

        let suffix = uri.strip_prefix("data:image/jpeg;base64,");
        prop_assert!(suffix.is_some());
        prop_assert_eq!(STANDARD.decode(suffix.unwrap()).unwrap(), bytes);
    }
}
