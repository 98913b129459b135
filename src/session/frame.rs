use std::collections::VecDeque;

use anyhow::bail;

use crate::config::{BYTES_PER_PIXEL, FRAME_BUFFER_SIZE};

/// 一帧 RGBA8 图像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CameraFrame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            bail!("empty frame {}x{}", width, height);
        }
        let Some(expected) = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        else {
            bail!("frame {}x{} too large", width, height);
        };
        if data.len() != expected {
            bail!(
                "frame {}x{} expects {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            );
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// 每行字节数
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// 帧缓冲，先进先出
///
/// 满时丢弃最旧的一帧，出队顺序与到达顺序一致。
#[derive(Debug)]
pub struct FrameBuffer {
    frames: VecDeque<CameraFrame>,
    capacity: usize,
    dropped: u64,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::with_capacity(FRAME_BUFFER_SIZE)
    }
}

impl FrameBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn push_back(&mut self, frame: CameraFrame) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
            self.dropped += 1;
            log::debug!("frame buffer full, dropped oldest ({} total)", self.dropped);
        }
        self.frames.push_back(frame);
    }

    pub fn pop_front(&mut self) -> Option<CameraFrame> {
        self.frames.pop_front()
    }

    /// 清空缓冲并重置丢帧计数，返回清掉的帧数
    pub fn clear(&mut self) -> usize {
        let discarded = self.frames.len();
        self.frames.clear();
        self.dropped = 0;
        discarded
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// 因缓冲满而丢弃的帧数
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
