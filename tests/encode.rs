use adcwave::wav;
use pretty_assertions::assert_eq;
use rstest::rstest;
use temp_dir::TempDir;

use shared::setup_tracing;

#[rstest]
#[case(40_000, 32_767)]
#[case(-40_000, -32_768)]
#[case(12, 12)]
fn out_of_range_samples_are_clamped(#[case] sample: i32, #[case] written: i16) {
    setup_tracing();

    let test_dir = TempDir::new().unwrap();
    let wav_path = test_dir.child("clamped.wav");
    wav::write_mono(&wav_path, &[sample], 44_100).unwrap();

    let samples: Vec<i16> = hound::WavReader::open(&wav_path)
        .unwrap()
        .samples()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(samples, vec![written]);
}

#[test]
fn frame_count_equals_sample_count() {
    setup_tracing();

    let test_dir = TempDir::new().unwrap();
    let wav_path = test_dir.child("frames.wav");
    wav::write_mono(&wav_path, &[0, 1, 2, 3, 4], 8000).unwrap();

    let reader = hound::WavReader::open(&wav_path).unwrap();
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.duration(), 5);
}

#[test]
fn missing_directory_fails_to_create() {
    setup_tracing();

    let test_dir = TempDir::new().unwrap();
    let wav_path = test_dir.child("not_there").join("out.wav");

    let res = wav::write_mono(&wav_path, &[0], 44_100);
    assert!(matches!(res, Err(wav::Error::Create(_))));
}
