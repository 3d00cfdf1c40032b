use crossbeam_channel::TryRecvError;
use log::trace;
use std::thread;

/// Number of items handed to a worker at a time.
const CHUNK: usize = 256;

/// How many worker threads to use; 0 means one per CPU.
pub fn thread_count(jobs: usize) -> usize {
    if jobs == 0 { num_cpus::get() } else { jobs }
}

/// Apply `f` to every item, possibly on several threads.
///
/// The output is in the same order as `items`.
pub fn map_ordered<T, R, F>(items: &[T], nthreads: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    if nthreads <= 1 || items.len() <= CHUNK {
        return items.iter().map(f).collect();
    }
    let (s1, r1) = crossbeam_channel::unbounded();
    let njobs = items.len().div_ceil(CHUNK);
    for job in 0..njobs {
        s1.send(job).unwrap();
    }
    drop(s1);
    let nthreads = nthreads.min(njobs);
    trace!(target: "racesplits", "{njobs} jobs, {nthreads} threads");
    let f = &f;
    thread::scope(|scope| {
        let (s2, r2) = crossbeam_channel::unbounded();
        for _ in 0..nthreads {
            let r1 = r1.clone();
            let s2 = s2.clone();
            scope.spawn(move || {
                loop {
                    match r1.try_recv() {
                        Ok(job) => {
                            let start = job * CHUNK;
                            let end = (start + CHUNK).min(items.len());
                            let out: Vec<R> = items[start..end].iter().map(f).collect();
                            s2.send((job, out)).unwrap();
                        }
                        Err(TryRecvError::Empty) => unreachable!(),
                        Err(TryRecvError::Disconnected) => break,
                    }
                }
            });
        }
        drop(s2);
        let mut done = Vec::with_capacity(njobs);
        while let Ok(part) = r2.recv() {
            done.push(part);
        }
        done.sort_by_key(|&(job, _)| job);
        done.into_iter().flat_map(|(_, out)| out).collect()
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_order() {
        let items: Vec<usize> = (0..10_000).collect();
        let expected: Vec<usize> = items.iter().map(|x| x * 3).collect();
        for nthreads in [1, 2, 7] {
            assert_eq!(map_ordered(&items, nthreads, |x| x * 3), expected);
        }
    }

    #[test]
    fn empty_input() {
        let items: Vec<u8> = vec![];
        assert!(map_ordered(&items, 4, |&x| x).is_empty());
    }

    #[test]
    fn thread_count_auto() {
        assert_eq!(thread_count(3), 3);
        assert!(thread_count(0) >= 1);
    }
}
