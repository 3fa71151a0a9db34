use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingProcessor {
    calls: RefCell<Vec<usize>>,
    fail: bool,
}

impl MediaProcessor for RecordingProcessor {
    fn process(&self, clips: &[ClipSpec], out: &Path) -> SmartzoomResult<PathBuf> {
        self.calls.borrow_mut().push(clips.len());
        if self.fail {
            return Err(anyhow::anyhow!("encoder crashed").into());
        }
        Ok(out.to_path_buf())
    }
}

fn clip(start: f64, end: f64) -> ClipSpec {
    ClipSpec {
        path: PathBuf::from("clip.mp4"),
        trim_start: start,
        trim_end: end,
    }
}

#[test]
fn valid_clips_are_delegated() {
    let p = RecordingProcessor::default();
    let out = export_clips(&p, &[clip(0.0, 1.0), clip(2.0, 3.5)], Path::new("out.mp4")).unwrap();
    assert_eq!(out, PathBuf::from("out.mp4"));
    assert_eq!(*p.calls.borrow(), vec![2]);
}

#[test]
fn invalid_clips_never_reach_the_processor() {
    let p = RecordingProcessor::default();
    assert!(export_clips(&p, &[], Path::new("o.mp4")).is_err());
    assert!(export_clips(&p, &[clip(2.0, 1.0)], Path::new("o.mp4")).is_err());
    assert!(export_clips(&p, &[clip(0.0, f64::NAN)], Path::new("o.mp4")).is_err());
    let unnamed = ClipSpec {
        path: PathBuf::new(),
        ..clip(0.0, 1.0)
    };
    assert!(unnamed.validate().is_err());
    assert!(p.calls.borrow().is_empty());
}

#[test]
fn processor_failures_propagate() {
    let p = RecordingProcessor {
        fail: true,
        ..Default::default()
    };
    let err = export_clips(&p, &[clip(0.0, 1.0)], Path::new("o.mp4")).unwrap_err();
    assert!(err.to_string().contains("encoder crashed"));
}

#[test]
fn clip_specs_use_camel_case_json() {
    let c: ClipSpec =
        serde_json::from_str(r#"{"path": "a.mp4", "trimStart": 1.0, "trimEnd": 2.0}"#).unwrap();
    assert_eq!(c, ClipSpec { path: PathBuf::from("a.mp4"), trim_start: 1.0, trim_end: 2.0 });
}
