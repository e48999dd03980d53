//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, ItemTexts, KeyNames, ModalTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "HN 逐层浏览",
        no_data: "暂无内容",
        quit: "退出",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            up_down: "↑↓",
            left: "←",
            right: "→",
            enter: "Enter",
            esc: "Esc",
            retry: "r",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            move_focus: "移动",
            back_to_root: "回到首页",
            open_replies: "查看回复",
            open_link: "打开链接",
            retry: "重试",
            help: "帮助",
            close: "关闭",
        },
    },

    // ========================================================================
    // 条目
    // ========================================================================
    item: ItemTexts {
        loading: "加载中…",
        failed: "加载失败",
        retry_hint: "按 r 重试",
        deleted: "[已删除]",
        dead: "[已失效]",
        anonymous: "匿名",
        points: "分",
        replies: "条回复",
        no_replies: "暂无回复",
        placeholder: "·",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        cached: "已缓存",
        pending: "加载中",
        depth: "层级",
        opened: "已打开",
        no_link: "没有可打开的链接",
        no_children: "没有回复",
        waiting: "仍在加载，完成后自动展开",
        still_failed: "该条目加载失败",
        retrying: "正在重试",
        nothing_to_retry: "无需重试",
        loading_root: "正在加载首页...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "帮助",
        help_navigation: "导航",
        help_actions: "操作",
        help_close: "按 Esc 关闭帮助",
        error_title: "错误",
        error_close: "按 Esc 或 Enter 关闭",
        root_failed: "首页加载失败",
    },
};
