mod common;

use std::io::Cursor;
use std::path::PathBuf;

use common::*;
use mnist_reader::mnist::DatasetKind;
use mnist_reader::{ImageSet, LabelSet, MnistError, MnistFiles, MnistReader, Stage};

#[test]
fn label_file_decodes_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "labels", &label_bytes(&[5, 0, 7]));

    let labels = LabelSet::open(&path).expect("decode labels");
    assert_eq!(labels.count(), 3);
    assert_eq!(labels.labels(), &[5, 0, 7]);
    assert_eq!(labels.get_label(1), 0);
}

#[test]
fn image_file_decodes_dimensions_and_pixels() {
    let pixels: Vec<u8> = (0..24).collect();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "images", &image_bytes(2, 3, 4, &pixels));

    let images = ImageSet::open(&path).expect("decode images");
    assert_eq!(images.count(), 2);
    assert_eq!(images.rows(), 3);
    assert_eq!(images.cols(), 4);
    assert_eq!(images.pixels(), pixels.as_slice());
}

#[test]
fn decodes_from_any_reader() {
    let images = ImageSet::from_reader(Cursor::new(image_bytes(1, 2, 2, &[10, 20, 30, 40])))
        .expect("decode images");
    assert_eq!(images.get_flat_image(0), &[10, 20, 30, 40]);

    let labels = LabelSet::from_reader(Cursor::new(label_bytes(&[9]))).expect("decode labels");
    assert_eq!(labels.get_label(0), 9);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = label_bytes(&[1, 2]);
    bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

    let labels = LabelSet::from_reader(Cursor::new(bytes)).expect("decode labels");
    assert_eq!(labels.labels(), &[1, 2]);
}

#[test]
fn empty_sets_decode() {
    let images = ImageSet::from_reader(Cursor::new(image_bytes(0, 28, 28, &[]))).expect("images");
    assert!(images.is_empty());
    assert_eq!(images.image_size(), 784);

    let labels = LabelSet::from_reader(Cursor::new(label_bytes(&[]))).expect("labels");
    assert!(labels.is_empty());
}

#[test]
fn magic_mismatch_is_reported_before_header() {
    // Only the magic number is present: reaching the header would be a short read.
    let err = ImageSet::from_reader(Cursor::new(LABEL_MAGIC.to_be_bytes().to_vec()))
        .expect_err("label magic in image file");

    assert_eq!(err.stage(), Some(Stage::Magic));
    assert!(
        matches!(
            err.root(),
            MnistError::MagicMismatch { expected: 2051, found: 2049 }
        ),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn truncated_magic_is_a_short_read() {
    let err = LabelSet::from_reader(Cursor::new(vec![0, 0])).expect_err("two bytes");
    assert_eq!(err.stage(), Some(Stage::Magic));
    assert!(matches!(err.root(), MnistError::ShortRead { expected: 4, found: 2 }));
}

#[test]
fn truncated_header_fails_in_config_stage() {
    let mut bytes = image_bytes(1, 2, 2, &[1, 2, 3, 4]);
    bytes.truncate(4 + 4 + 2);

    let err = ImageSet::from_reader(Cursor::new(bytes)).expect_err("truncated header");
    assert_eq!(err.stage(), Some(Stage::Config));
    assert!(matches!(err.root(), MnistError::ShortRead { expected: 4, found: 2 }));
    assert!(matches!(
        err,
        MnistError::Stage { kind: DatasetKind::Images, .. }
    ));
}

#[test]
fn truncated_payload_fails_in_data_stage() {
    let mut bytes = label_bytes(&[1, 2, 3, 4]);
    bytes.pop();

    let err = LabelSet::from_reader(Cursor::new(bytes)).expect_err("truncated payload");
    assert_eq!(err.stage(), Some(Stage::Data));
    assert!(matches!(err.root(), MnistError::ShortRead { expected: 4, found: 3 }));
}

#[test]
fn negative_dimensions_are_rejected() {
    let err = ImageSet::from_reader(Cursor::new(image_bytes(1, -28, 28, &[])))
        .expect_err("negative rows");
    assert_eq!(err.stage(), Some(Stage::Data));
    assert!(matches!(
        err.root(),
        MnistError::InvalidDimensions { count: 1, rows: -28, cols: 28 }
    ));

    let mut bytes = LABEL_MAGIC.to_be_bytes().to_vec();
    bytes.extend_from_slice(&(-1i32).to_be_bytes());
    let err = LabelSet::from_reader(Cursor::new(bytes)).expect_err("negative count");
    assert!(matches!(err.root(), MnistError::InvalidCount { count: -1 }));
}

#[test]
fn error_message_names_file_kind_and_stage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "short-images", &IMAGE_MAGIC.to_be_bytes());

    let err = ImageSet::open(&path).expect_err("header missing");
    let message = err.to_string();
    assert!(message.starts_with(&path.display().to_string()), "{}", message);
    assert!(message.contains("error reading image config"), "{}", message);
    assert!(message.contains("short read"), "{}", message);
}

#[test]
fn missing_file_fails_in_open_stage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist");

    let err = LabelSet::open(&path).expect_err("missing file");
    assert_eq!(err.stage(), Some(Stage::Open));
    match err.root() {
        MnistError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {:?}", other),
    }
    assert!(matches!(&err, MnistError::File { path: p, .. } if *p == path));
}

#[test]
fn gzipped_files_are_decompressed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let images = write_gz_file(dir.path(), "images.gz", &image_bytes(1, 2, 2, &[10, 20, 30, 40]));
    let labels = write_gz_file(dir.path(), "labels.gz", &label_bytes(&[3]));

    let mnist = MnistReader::new(
        &MnistFiles::default()
            .with_training_images(images)
            .with_training_labels(labels),
    )
    .expect("decode gzipped files");

    let images = mnist.training_images.expect("training images");
    assert_eq!(images.pixels(), &[10, 20, 30, 40]);
    assert_eq!(mnist.training_labels.expect("training labels").get_label(0), 3);
}

#[test]
fn reader_loads_all_four_sets_from_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), MnistFiles::TRAINING_IMAGES, &image_bytes(2, 1, 1, &[1, 2]));
    write_file(dir.path(), MnistFiles::TRAINING_LABELS, &label_bytes(&[7, 8]));
    write_file(dir.path(), MnistFiles::TESTING_IMAGES, &image_bytes(1, 1, 1, &[3]));
    write_file(dir.path(), MnistFiles::TESTING_LABELS, &label_bytes(&[9]));

    let mnist = MnistReader::from_dir(dir.path()).expect("load dir");
    assert_eq!(mnist.training_images.expect("training images").pixels(), &[1, 2]);
    assert_eq!(mnist.training_labels.expect("training labels").labels(), &[7, 8]);
    assert_eq!(mnist.testing_images.expect("testing images").pixels(), &[3]);
    assert_eq!(mnist.testing_labels.expect("testing labels").labels(), &[9]);
}

#[test]
fn partial_loading_skips_absent_locations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let images = write_file(dir.path(), "t10k-images", &image_bytes(1, 2, 2, &[1, 2, 3, 4]));

    let files = MnistFiles {
        // An empty path counts as absent and must not be opened.
        training_images: Some(PathBuf::new()),
        training_labels: None,
        testing_images: Some(images),
        testing_labels: None,
    };
    let mnist = MnistReader::new(&files).expect("partial load");

    assert!(mnist.training_images.is_none());
    assert!(mnist.training_labels.is_none());
    assert!(mnist.testing_images.is_some());
    assert!(mnist.testing_labels.is_none());
}

#[test]
fn first_failure_aborts_the_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = write_file(dir.path(), "bad-labels", &image_bytes(1, 1, 1, &[0]));
    let good = write_file(dir.path(), "good-images", &image_bytes(1, 1, 1, &[0]));

    let files = MnistFiles::default()
        .with_training_labels(&bad)
        .with_testing_images(good);
    let err = MnistReader::new(&files).expect_err("label file with image magic");

    assert_eq!(err.stage(), Some(Stage::Magic));
    assert!(matches!(&err, MnistError::File { path, .. } if *path == bad));
}

#[test]
fn checked_constructors_enforce_buffer_length() {
    assert!(matches!(
        ImageSet::new(2, 2, 2, vec![0; 7]),
        Err(MnistError::SizeMismatch { expected: 8, found: 7, .. })
    ));
    assert!(matches!(
        LabelSet::new(3, vec![0; 2]),
        Err(MnistError::SizeMismatch { expected: 3, found: 2, .. })
    ));
    assert!(ImageSet::new(1, 2, 3, vec![0; 6]).is_ok());
}
