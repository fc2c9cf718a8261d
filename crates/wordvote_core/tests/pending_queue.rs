//! End-to-end tests of recording into a pending directory.

use std::collections::HashSet;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;
use wordvote_core::{
    CoreError, Dictionary, RawSubmission, RequestContext, SubmissionRecorder, WordList,
};
use wordvote_queue::{DirectoryQueue, STAGING_PREFIX, VISIBLE_PREFIX};

fn visible_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| {
            let name = e.unwrap().file_name().to_string_lossy().into_owned();
            name.starts_with(VISIBLE_PREFIX).then_some(name)
        })
        .collect();
    names.sort();
    names
}

fn recorder_for(dir: &Path, words: Arc<dyn WordList>) -> SubmissionRecorder {
    let queue = Arc::new(DirectoryQueue::open(dir, true).unwrap());
    SubmissionRecorder::new(words, queue)
}

#[test]
fn accepted_vote_produces_one_record() {
    let temp = tempdir().unwrap();
    let dict_path = temp.path().join("words-alpha.txt");
    fs::write(&dict_path, "ant\ncat\ndog\n").unwrap();
    let pending = temp.path().join("pending");

    let recorder = recorder_for(&pending, Arc::new(Dictionary::load(&dict_path).unwrap()));
    let context = RequestContext::new(IpAddr::V4(Ipv4Addr::new(198, 51, 100, 4)));

    let receipt = recorder
        .submit(&context, &RawSubmission::new("3", "cat", "42"))
        .unwrap();

    let files = visible_files(&pending);
    assert_eq!(files, vec![format!("{VISIBLE_PREFIX}{}", receipt.id)]);
    let content = fs::read_to_string(pending.join(&files[0])).unwrap();
    assert_eq!(
        content,
        format!("{} 198.51.100.4 3 42 cat", receipt.timestamp())
    );
}

#[test]
fn rejected_votes_leave_directory_empty() {
    let temp = tempdir().unwrap();
    let recorder = recorder_for(temp.path(), Arc::new(Dictionary::from_words(["cat"])));
    let context = RequestContext::new(IpAddr::V4(Ipv4Addr::LOCALHOST));

    let cases = [
        RawSubmission::new("-1", "cat", "1"),
        RawSubmission::new("3", "Hello", "1"),
        RawSubmission::new("3", "cat", "65536"),
        RawSubmission::new("3", "zzzqx", "1"),
    ];
    for raw in &cases {
        let err = recorder.submit(&context, raw).unwrap_err();
        assert!(err.is_client_error(), "{raw:?} -> {err}");
    }
    assert!(matches!(
        recorder.submit(&context, &cases[3]),
        Err(CoreError::WordNotFound)
    ));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn concurrent_submissions_never_collide() {
    let temp = tempdir().unwrap();
    let recorder = recorder_for(temp.path(), Arc::new(Dictionary::from_words(["cat"])));
    let context = RequestContext::new(IpAddr::V4(Ipv4Addr::LOCALHOST));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let recorder = recorder.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|i| {
                        let raw = RawSubmission::new(t.to_string(), "cat", i.to_string());
                        recorder.submit(&context, &raw).unwrap().id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<_> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(ids.len(), 400);
    assert_eq!(visible_files(temp.path()).len(), 400);
    let staging_left = fs::read_dir(temp.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .starts_with(STAGING_PREFIX)
        })
        .count();
    assert_eq!(staging_left, 0);
}

#[test]
fn readers_never_observe_partial_records() {
    let temp = tempdir().unwrap();
    let dir = temp.path().to_path_buf();
    let recorder = recorder_for(&dir, Arc::new(Dictionary::from_words(["supercalifragilistic"])));
    let context = RequestContext::new(IpAddr::V4(Ipv4Addr::new(10, 1, 2, 3)));
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let dir = dir.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut observed = 0usize;
            while !done.load(Ordering::SeqCst) {
                for name in visible_files(&dir) {
                    let content = fs::read_to_string(dir.join(&name)).unwrap();
                    assert_eq!(
                        content.split_whitespace().count(),
                        5,
                        "partial record in {name}: {content:?}"
                    );
                    observed += 1;
                }
            }
            observed
        })
    };

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let recorder = recorder.clone();
            thread::spawn(move || {
                for i in 0..100u32 {
                    let raw = RawSubmission::new(i.to_string(), "supercalifragilistic", "65535");
                    recorder.submit(&context, &raw).unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::SeqCst);
    reader.join().unwrap();

    assert_eq!(visible_files(&dir).len(), 400);
}
