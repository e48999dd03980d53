//! 视口几何
//!
//! 纯函数：输入测得的尺寸，输出使焦点条目与最新层居中的偏移量。
//! 不读取导航栈或缓存，调用方在模型变化或终端尺寸变化时重新计算。

use std::time::{Duration, Instant};

/// 偏移过渡时长
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// 使焦点条目垂直居中的偏移
///
/// `viewport_height / 2 - item_height / 2 - item_offset`，
/// 其中 `item_offset` 为焦点条目在列内的起始位置。
pub fn center_item(viewport_height: i32, item_height: i32, item_offset: i32) -> i32 {
    viewport_height / 2 - item_height / 2 - item_offset
}

/// 使最新压入的层水平居中的偏移
///
/// `viewport_width / 2 + last_level_width / 2 - total_stack_width`，
/// 即最后一层的中线与视口中线对齐。
pub fn center_level(total_stack_width: i32, last_level_width: i32, viewport_width: i32) -> i32 {
    viewport_width / 2 + last_level_width / 2 - total_stack_width
}

/// ease-out 三次曲线
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// 两个偏移之间的缓动过渡
///
/// 在显式给定的时刻采样，不依赖时钟。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    from: i32,
    to: i32,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// 已停在 `value` 的过渡
    pub fn settled(value: i32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: TRANSITION_DURATION,
        }
    }

    /// 自定义时长
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// 切换到新目标，从 `now` 时刻的采样值出发
    ///
    /// 目标未变时不重新计时。
    pub fn retarget(&mut self, to: i32, now: Instant) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.started = now;
    }

    /// 立即跳到目标（例如终端尺寸变化时）
    pub fn jump(&mut self, to: i32, now: Instant) {
        self.from = to;
        self.to = to;
        self.started = now;
    }

    /// `now` 时刻的偏移
    pub fn value_at(&self, now: Instant) -> i32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        let delta = f64::from(self.to - self.from);
        #[allow(clippy::cast_possible_truncation)]
        let step = (delta * ease_out_cubic(progress)).round() as i32;
        self.from + step
    }

    /// `now` 时刻是否仍在过渡
    pub fn is_animating(&self, now: Instant) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
