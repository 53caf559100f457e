use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter, FsLocalAdapter};
use crate::app::trim_interactor::TrimInteractor;
use crate::ports::{FsPort, ProbePort, TrimPort};

pub trait AppContainer: Send + Sync {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
}

pub struct DefaultAppContainer {
    trim_interactor: Arc<TrimInteractor>,
}

impl DefaultAppContainer {
    /// Wire the ffmpeg-backed adapters, using the resolved program paths
    pub fn new(ffmpeg: PathBuf, ffprobe: PathBuf) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(ffprobe));
        let trim_port = Arc::new(FFmpegAdapter::new(ffmpeg));
        let fs_port = Arc::new(FsLocalAdapter::new());

        let trim_interactor = Arc::new(TrimInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            trim_port as Arc<dyn TrimPort>,
            fs_port as Arc<dyn FsPort>,
        ));

        Self { trim_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }
}
