//! ソートワーカー（TUIとは別スレッドで動く）
//!
//! ワーカーは端末に一切触れない。交換のたびに配列全体を [`SnapshotSlot`] に上書きし、
//! 描画側は毎フレームそれを取り出す。スロットは1枠だけなので、描画が遅れても
//! 溜まるのは最新の1枚だけ。完了通知だけはチャンネルで送る。

use crate::sorts::{Algorithm, SortObserver};
use crate::stats::OperationCounters;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 交換直後の配列とその時点の累計
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub data: Vec<i32>,
    pub counters: OperationCounters,
}

/// ワーカーと描画側で共有する1枠のスナップショット置き場（後勝ち）
#[derive(Debug, Clone, Default)]
pub struct SnapshotSlot {
    inner: Arc<Mutex<Option<Snapshot>>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Snapshot>> {
        // 書き手が panic しても中身は丸ごと置き換えるだけなので、そのまま使う
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 前のスナップショットを上書きする（未読のものは捨てられる）
    pub fn store(&self, data: &[i32], counters: OperationCounters) {
        let mut slot = self.lock();
        match slot.as_mut() {
            Some(snapshot) => {
                snapshot.data.clear();
                snapshot.data.extend_from_slice(data);
                snapshot.counters = counters;
            }
            None => {
                *slot = Some(Snapshot { data: data.to_vec(), counters });
            }
        }
    }

    /// 最新のスナップショットを取り出し、スロットを空にする
    pub fn take(&self) -> Option<Snapshot> {
        self.lock().take()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    /// 自分以外にこのスロットを持つ側（描画側）が残っているか
    fn has_reader(&self) -> bool {
        Arc::strong_count(&self.inner) > 1
    }
}

/// ソート完了の通知
#[derive(Debug, Clone, PartialEq)]
pub struct SortFinished {
    pub algorithm: Algorithm,
    pub data: Vec<i32>,
    pub counters: OperationCounters,
    pub elapsed: Duration,
}

/// 交換ごとにスナップショットを書き込み、一定時間待つオブザーバ
pub struct SlotObserver {
    slot: SnapshotSlot,
    step_delay: Duration,
    /// 描画側が居なくなったことをログに出したか
    reader_gone: bool,
}

impl SlotObserver {
    pub fn new(slot: SnapshotSlot, step_delay: Duration) -> Self {
        Self { slot, step_delay, reader_gone: false }
    }
}

impl SortObserver for SlotObserver {
    fn on_interchange(&mut self, data: &[i32], counters: &OperationCounters) {
        // 描画側が終了していてもソートは続ける
        if !self.reader_gone && !self.slot.has_reader() {
            warn!(target: "worker", "renderer_gone: snapshots are no longer read");
            self.reader_gone = true;
        }
        if !self.reader_gone {
            self.slot.store(data, *counters);
        }
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}

/// `data` を `algorithm` でソートするワーカーを開始
///
/// 実行時間は待ち時間を含むソート全体の経過時間。
pub fn start_sort_worker(
    algorithm: Algorithm,
    mut data: Vec<i32>,
    step_delay: Duration,
    slot: SnapshotSlot,
    tx: Sender<SortFinished>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("sort-worker".into())
        .spawn(move || {
            info!(target: "worker", %algorithm, len = data.len(), "sort_started");
            let mut observer = SlotObserver::new(slot, step_delay);

            let start = Instant::now();
            let counters = algorithm.sort_observed(&mut data, &mut observer);
            let elapsed = start.elapsed();

            info!(target: "worker", %algorithm, %counters, ?elapsed, "sort_finished");
            let finished = SortFinished { algorithm, data, counters, elapsed };
            if tx.send(finished).is_err() {
                warn!(target: "worker", %algorithm, "renderer_gone: final result dropped");
            }
        })
}
