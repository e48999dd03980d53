//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HintTexts, ItemTexts, KeyNames, ModalTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "HN Drill-down",
        no_data: "Nothing here",
        quit: "Quit",
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
            move_focus: "Move",
            back_to_root: "Back to top",
            open_replies: "Replies",
            open_link: "Open link",
            retry: "Retry",
            help: "Help",
            close: "Close",
        },
    },

    // ========================================================================
    // 条目
    // ========================================================================
    item: ItemTexts {
        loading: "Loading…",
        failed: "Failed to load",
        retry_hint: "press r to retry",
        deleted: "[deleted]",
        dead: "[dead]",
        anonymous: "anonymous",
        points: "points",
        replies: "replies",
        no_replies: "no replies",
        placeholder: "·",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        cached: "cached",
        pending: "pending",
        depth: "depth",
        opened: "Opened",
        no_link: "No link to open",
        no_children: "No replies",
        waiting: "Still loading, will open when ready",
        still_failed: "This item failed to load",
        retrying: "Retrying",
        nothing_to_retry: "Nothing to retry",
        loading_root: "Loading front page...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "Help",
        help_navigation: "Navigation",
        help_actions: "Actions",
        help_close: "Press Esc to close the help",
        error_title: "Error",
        error_close: "Press Esc or Enter to close",
        root_failed: "Could not load the front page",
    },
};
