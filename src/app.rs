//! アプリケーション状態管理モジュール

use crate::config::VisualizerConfig;
use crate::generate::random_array;
use crate::sorts::Algorithm;
use crate::stats::OperationCounters;
use crate::worker::{SnapshotSlot, SortFinished, start_sort_worker};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 完了したソートの結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub counters: OperationCounters,
    pub elapsed: Duration,
}

/// 可視化アプリの状態
pub struct App {
    pub config: VisualizerConfig,
    /// 毎回のソートの元になる配列（ソートはこのコピーに対して行う）
    pub source: Vec<i32>,
    /// 描画中の配列（ワーカーから届いた最新のスナップショット）
    pub display: Vec<i32>,
    /// ドロップダウンで選択中のアルゴリズム
    pub selected: Algorithm,
    /// ドロップダウンが開いているか
    pub dropdown_open: bool,
    /// ソート実行中フラグ
    pub pending: bool,
    /// 実行中のアルゴリズムと開始時刻
    pub running: Option<(Algorithm, Instant)>,
    /// 実行中の累計（ラベル表示用）
    pub live_counters: OperationCounters,
    /// 直近に完了したソートの結果
    pub last_run: Option<RunSummary>,
    /// ワーカーが途中経過を上書きする1枠のスロット
    slot: SnapshotSlot,
    /// 完了通知の送信用（各ワーカーにクローンを渡す）
    tx: Sender<SortFinished>,
    /// 完了通知の受信用
    rx: Receiver<SortFinished>,
    /// 実行中ワーカーのハンドル（完了通知なしに終わったことを検出するため）
    worker: Option<JoinHandle<()>>,
}

impl App {
    /// 既定設定でアプリを作成
    pub fn new() -> Self {
        Self::with_config(VisualizerConfig::new())
    }

    /// 設定を指定し、ランダム配列を生成してアプリを作成
    pub fn with_config(config: VisualizerConfig) -> Self {
        let source = random_array(config.array_size, config.max_value);
        Self::with_source(config, source)
    }

    /// 元配列を指定してアプリを作成
    pub fn with_source(config: VisualizerConfig, source: Vec<i32>) -> Self {
        let (tx, rx) = mpsc::channel::<SortFinished>();
        Self {
            config,
            display: source.clone(),
            source,
            selected: Algorithm::Insertion,
            dropdown_open: false,
            pending: false,
            running: None,
            live_counters: OperationCounters::new(),
            last_run: None,
            slot: SnapshotSlot::new(),
            tx,
            rx,
            worker: None,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// 選択中のアルゴリズムでソートを開始（実行中は無視）
    pub fn start_sort(&mut self) -> std::io::Result<()> {
        if self.pending {
            debug!(target: "app", "start_ignored: sort already running");
            return Ok(());
        }
        let algorithm = self.selected;
        let delay = Duration::from_millis(self.config.step_delay_ms);
        // 前回の残りを捨ててから開始
        self.slot.take();
        let handle = start_sort_worker(
            algorithm,
            self.source.clone(),
            delay,
            self.slot.clone(),
            self.tx.clone(),
        )?;
        self.worker = Some(handle);

        info!(target: "app", %algorithm, "start_sort");
        self.pending = true;
        self.running = Some((algorithm, Instant::now()));
        self.live_counters = OperationCounters::new();
        self.display = self.source.clone();
        Ok(())
    }

    /// 新しいランダム配列に差し替える（実行中は無視）
    pub fn regenerate(&mut self) {
        if self.pending {
            return;
        }
        self.source = random_array(self.config.array_size, self.config.max_value);
        self.display = self.source.clone();
        self.last_run = None;
        self.live_counters = OperationCounters::new();
        info!(target: "app", len = self.source.len(), "regenerated");
    }

    /// ワーカーの最新スナップショットと完了通知を反映
    ///
    /// 同じフレームに完了通知があれば、途中経過より完了時の状態が優先される。
    pub fn check_worker(&mut self) {
        // 完了通知を読む前に終了を確認する（通知を送ってから終了するので、
        // ここで終了済みなら通知は必ずこの後の受信で見える）
        let worker_exited = self.worker.as_ref().is_some_and(JoinHandle::is_finished);

        if let Some(snapshot) = self.slot.take() {
            self.display = snapshot.data;
            self.live_counters = snapshot.counters;
        }

        while let Ok(finished) = self.rx.try_recv() {
            self.apply_finished(finished);
        }

        if worker_exited && self.pending {
            let outcome = self.worker.take().map(JoinHandle::join);
            warn!(
                target: "app",
                panicked = matches!(outcome, Some(Err(_))),
                "worker_exited_without_result"
            );
            self.pending = false;
            self.running = None;
        }
    }

    fn apply_finished(&mut self, finished: SortFinished) {
        let SortFinished { algorithm, data, counters, elapsed } = finished;
        // 完了より前に書かれた途中経過は不要
        self.slot.take();
        self.display = data;
        self.live_counters = counters;
        self.last_run = Some(RunSummary { algorithm, counters, elapsed });
        self.pending = false;
        self.running = None;
        self.worker = None;
        info!(target: "app", %algorithm, %counters, ?elapsed, "sort_received");
    }

    /// ラベルに出す実行時間（実行中は経過時間、完了後は計測値）
    pub fn runtime(&self) -> Option<Duration> {
        match (&self.running, &self.last_run) {
            (Some((_, started)), _) => Some(started.elapsed()),
            (None, Some(run)) => Some(run.elapsed),
            (None, None) => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
