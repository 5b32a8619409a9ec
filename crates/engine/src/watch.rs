// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use log::{debug, info, warn};
use notify::{Event, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

/// Watch the input files and run the callback after each change.
///
/// Runs once up front. The parent directory of every input is watched
/// rather than the file itself, so saves that write a new file and rename
/// it over the old one keep triggering runs. Events that name no input are
/// ignored. Bursts of events are coalesced by waiting
/// `config.watch_interval` and draining the queue. This function blocks
/// until the watcher shuts down.
///
/// # Errors
/// Fails when reading standard input or when a directory cannot be watched.
pub fn watch_loop<F>(config: &Config, mut on_event: F) -> Result<()>
where
    F: FnMut(),
{
    if config.reads_stdin() {
        return Err(EngineError::Config(
            "watch mode needs at least one input file".to_string(),
        ));
    }

    let (dirs, files) = watch_targets(&config.inputs)?;
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => warn!("watch error: {e:?}"),
    })?;

    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
    }

    info!(
        "watching {} file(s) in {} director(ies)",
        config.inputs.len(),
        dirs.len()
    );
    on_event();

    let debounce_interval = config.watch_interval;

    while let Ok(event) = rx.recv() {
        if !touches_input(&event, &files) {
            continue;
        }
        debug!("change detected: {:?}", event.kind);
        std::thread::sleep(debounce_interval);
        while rx.try_recv().is_ok() {}

        on_event();
    }
    Ok(())
}

/// Parent directories to watch, and every spelling of the inputs an event
/// may carry (absolute, and canonical where the file exists).
fn watch_targets(inputs: &[PathBuf]) -> Result<(BTreeSet<PathBuf>, Vec<PathBuf>)> {
    let mut dirs = BTreeSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let absolute = std::path::absolute(input).map_err(|e| EngineError::FileRead {
            path: input.clone(),
            source: e,
        })?;
        let dir = absolute
            .parent()
            .map_or_else(|| absolute.clone(), Path::to_path_buf);
        dirs.insert(dir);

        if let Ok(canonical) = absolute.canonicalize()
            && canonical != absolute
        {
            files.push(canonical);
        }
        files.push(absolute);
    }

    Ok((dirs, files))
}

fn touches_input(event: &Event, files: &[PathBuf]) -> bool {
    event.paths.iter().any(|path| files.contains(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    fn wait_for_runs(runs: &AtomicUsize, expected: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while runs.load(Ordering::SeqCst) < expected && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(20));
        }
        assert!(
            runs.load(Ordering::SeqCst) >= expected,
            "expected {expected} runs, got {}",
            runs.load(Ordering::SeqCst)
        );
    }

    fn spawn_watch(path: &Path) -> Arc<AtomicUsize> {
        let config = ConfigBuilder::default()
            .inputs(vec![path.to_path_buf()])
            .watch(true)
            .watch_interval(Duration::from_millis(100))
            .build()
            .unwrap();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        thread::spawn(move || {
            let _ = watch_loop(&config, || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });
        wait_for_runs(&runs, 1);
        runs
    }

    #[test]
    fn stdin_cannot_be_watched() {
        let result = watch_loop(&Config::default(), || {});
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn reruns_after_every_rename_over_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiersz.txt");
        fs::write(&path, "kot\n").unwrap();
        let runs = spawn_watch(&path);

        for save in 0..3 {
            let tmp = dir.path().join(format!(".wiersz.txt.{save}"));
            fs::write(&tmp, format!("kot\npłot {save}\n")).unwrap();
            fs::rename(&tmp, &path).unwrap();
            wait_for_runs(&runs, save + 2);
            thread::sleep(Duration::from_millis(300));
        }

        assert_eq!(runs.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn other_files_in_the_directory_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiersz.txt");
        fs::write(&path, "kot\n").unwrap();
        let runs = spawn_watch(&path);

        fs::write(dir.path().join("notatki.txt"), "dom\n").unwrap();
        thread::sleep(Duration::from_millis(500));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        fs::write(&path, "kot\npłot\n").unwrap();
        wait_for_runs(&runs, 2);
    }

    #[test]
    fn inputs_sharing_a_directory_are_watched_once() {
        let (dirs, files) =
            watch_targets(&[PathBuf::from("/srv/a.txt"), PathBuf::from("/srv/b.txt")]).unwrap();
        assert_eq!(dirs.into_iter().collect::<Vec<_>>(), [PathBuf::from("/srv")]);
        assert!(files.contains(&PathBuf::from("/srv/a.txt")));
        assert!(files.contains(&PathBuf::from("/srv/b.txt")));
    }
}
