//! 内容节点

use chrono::{DateTime, Utc};
use hn_drilldown_provider::RawItem;
use serde::Serialize;

use super::ItemId;
use crate::error::{CoreError, CoreResult};

/// 节点类型及其专属字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    Story {
        title: String,
        url: Option<String>,
        score: i64,
        descendants: u64,
    },
    Comment {
        parent: ItemId,
    },
    Job {
        title: String,
        url: Option<String>,
        score: i64,
    },
    Poll {
        title: String,
        score: i64,
        parts: Vec<ItemId>,
        descendants: u64,
    },
    #[serde(rename = "pollopt")]
    PollOpt {
        poll: ItemId,
        score: i64,
    },
}

impl NodeKind {
    /// 类型名（与远端 `type` 字段一致）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Story { .. } => "story",
            Self::Comment { .. } => "comment",
            Self::Job { .. } => "job",
            Self::Poll { .. } => "poll",
            Self::PollOpt { .. } => "pollopt",
        }
    }
}

/// 已获取的内容节点，获取后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: ItemId,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    /// HTML 片段，未清洗
    pub text: Option<String>,
    pub children: Vec<ItemId>,
    pub deleted: bool,
    pub dead: bool,
}

impl Node {
    /// 将远端原始条目转换为节点
    ///
    /// 缺少 `type`、未知 `type`、缺少时间戳或缺少类型必需字段时返回
    /// [`CoreError::MalformedResponse`]。已删除条目允许缺少标题与父节点。
    pub fn from_raw(raw: RawItem) -> CoreResult<Self> {
        let id = raw.id;
        let malformed = |detail: &str| CoreError::MalformedResponse {
            id,
            detail: detail.to_string(),
        };
        let lenient = raw.deleted || raw.dead;

        let Some(kind_name) = raw.kind.as_deref() else {
            return Err(malformed("missing `type`"));
        };

        let title = || -> CoreResult<String> {
            match raw.title.clone() {
                Some(title) => Ok(title),
                None if lenient => Ok(String::new()),
                None => Err(malformed("missing `title`")),
            }
        };
        let score = raw.score.unwrap_or(0);

        let kind = match kind_name {
            "story" => NodeKind::Story {
                title: title()?,
                url: raw.url.clone().filter(|u| !u.is_empty()),
                score,
                descendants: raw.descendants.unwrap_or(0),
            },
            "comment" => NodeKind::Comment {
                parent: match raw.parent {
                    Some(parent) => parent,
                    None if lenient => 0,
                    None => return Err(malformed("comment without `parent`")),
                },
            },
            "job" => NodeKind::Job {
                title: title()?,
                url: raw.url.clone().filter(|u| !u.is_empty()),
                score,
            },
            "poll" => NodeKind::Poll {
                title: title()?,
                score,
                parts: raw.parts.clone(),
                descendants: raw.descendants.unwrap_or(0),
            },
            "pollopt" => NodeKind::PollOpt {
                poll: match raw.poll {
                    Some(poll) => poll,
                    None if lenient => 0,
                    None => return Err(malformed("pollopt without `poll`")),
                },
                score,
            },
            other => return Err(malformed(&format!("unknown type `{other}`"))),
        };

        let time = raw.time.ok_or_else(|| malformed("missing `time`"))?;
        let created_at =
            DateTime::from_timestamp(time, 0).ok_or_else(|| malformed("`time` out of range"))?;

        Ok(Self {
            id,
            kind,
            author: raw.by,
            created_at,
            text: raw.text.filter(|t| !t.is_empty()),
            children: raw.kids,
            deleted: raw.deleted,
            dead: raw.dead,
        })
    }

    /// 是否有子节点（可下钻）
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// 可在外部打开的链接：仅 story 且带 url
    pub fn external_url(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Story { url, .. } => url.as_deref(),
            NodeKind::Comment { .. }
            | NodeKind::Job { .. }
            | NodeKind::Poll { .. }
            | NodeKind::PollOpt { .. } => None,
        }
    }

    /// 标题（story / job / poll）
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Story { title, .. }
            | NodeKind::Job { title, .. }
            | NodeKind::Poll { title, .. } => Some(title.as_str()),
            NodeKind::Comment { .. } | NodeKind::PollOpt { .. } => None,
        }
    }

    /// 分数（评论没有分数）
    pub fn score(&self) -> Option<i64> {
        match &self.kind {
            NodeKind::Story { score, .. }
            | NodeKind::Job { score, .. }
            | NodeKind::Poll { score, .. }
            | NodeKind::PollOpt { score, .. } => Some(*score),
            NodeKind::Comment { .. } => None,
        }
    }
}
