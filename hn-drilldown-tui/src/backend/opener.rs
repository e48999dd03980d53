//! 外部链接打开

use hn_drilldown_core::ExternalOpener;

/// 使用系统浏览器打开链接
pub struct BrowserOpener;

impl ExternalOpener for BrowserOpener {
    fn open_external(&self, url: &str) {
        match webbrowser::open(url) {
            Ok(()) => log::info!("已在浏览器中打开: {url}"),
            Err(e) => log::error!("打开链接失败 {url}: {e}"),
        }
    }
}
