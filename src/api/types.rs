//! Wire types for the automation backend.
//!
//! The backend speaks camelCase JSON; everything here is a transient
//! client-side copy, deserialized as-is and never mutated locally beyond
//! whole-object replacement after a revalidation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::util::{calculate_percentage, normalize_status};

// ============ Posts ============

/// Media type of a generated post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Image => "Image",
            MediaType::Video => "Video",
        }
    }

    pub fn icon_label(&self) -> &'static str {
        match self {
            MediaType::Image => "IMG",
            MediaType::Video => "VID",
        }
    }
}

/// Lifecycle status of a post.
///
/// Parsing runs through [`normalize_status`], so any spelling the backend
/// (or an older backend) produces compares equal to the canonical variant.
/// Unknown statuses survive round-tripping instead of failing the whole
/// payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
    Posted,
    Other(String),
}

impl PostStatus {
    pub fn parse(raw: &str) -> Self {
        match normalize_status(raw).as_str() {
            "pending" => PostStatus::Pending,
            "approved" => PostStatus::Approved,
            "rejected" => PostStatus::Rejected,
            "posted" => PostStatus::Posted,
            other => PostStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Pending => "pending",
            PostStatus::Approved => "approved",
            PostStatus::Rejected => "rejected",
            PostStatus::Posted => "posted",
            PostStatus::Other(s) => s,
        }
    }

    /// Badge classes for the status pill on post cards.
    pub fn badge_class(&self) -> &'static str {
        match self {
            PostStatus::Pending => "badge bg-yellow-500 text-white",
            PostStatus::Approved => "badge bg-green-600 text-white",
            PostStatus::Rejected => "badge bg-red-600 text-white",
            PostStatus::Posted => "badge bg-blue-600 text-white",
            PostStatus::Other(_) => "badge bg-gray-800 text-white",
        }
    }

    /// Display label ("pending approval" spellings read as "pending").
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PostStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PostStatus::parse(&raw))
    }
}

impl Serialize for PostStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An AI-generated post awaiting review or already published.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Human-facing post identifier (e.g. "2026-03-05-001")
    #[serde(default)]
    pub post_id: String,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    pub status: PostStatus,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    /// Preview frame for videos
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Seconds, video only
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub scheduled_post_time: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub rejected_by: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Post {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// URL to show in a card: the thumbnail for videos, the media itself
    /// for images.
    pub fn preview_url(&self) -> Option<&str> {
        if self.is_video() {
            self.thumbnail_url.as_deref()
        } else {
            self.media_url.as_deref()
        }
    }
}

/// Per-status post counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusCounts {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub approved: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default)]
    pub posted: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TypeCounts {
    #[serde(default)]
    pub image: u64,
    #[serde(default)]
    pub video: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStatistics {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_status: StatusCounts,
    #[serde(default)]
    pub by_type: TypeCounts,
}

impl PostStatistics {
    /// Share of posts that made it past review.
    pub fn approval_rate(&self) -> u64 {
        calculate_percentage(
            self.by_status.approved + self.by_status.posted,
            self.total,
        )
    }

    /// Share of posts actually published.
    pub fn publishing_rate(&self) -> u64 {
        calculate_percentage(self.by_status.posted, self.total)
    }
}

/// Result of an approve or edit call. The backend may have attempted an
/// immediate publish; the flags say how that went.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalOutcome {
    #[serde(default)]
    pub immediate_post: Option<bool>,
    #[serde(default)]
    pub posting_error: Option<serde_json::Value>,
    #[serde(default)]
    pub post: Option<Post>,
}

/// What happened to the publish attempt behind an approve/edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Published right away
    PublishedNow,
    /// Publish attempt failed; the backend will retry and the post stays
    /// approved
    FailedWillRetry(String),
    /// No immediate attempt; the post waits for its scheduled slot
    Scheduled,
}

impl ApprovalOutcome {
    pub fn publish_outcome(&self) -> PublishOutcome {
        match (self.immediate_post, &self.posting_error) {
            (Some(false), Some(error)) => PublishOutcome::FailedWillRetry(error.to_string()),
            (Some(true), _) => PublishOutcome::PublishedNow,
            _ => PublishOutcome::Scheduled,
        }
    }
}

/// Review-trail entry for a post.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

// ============ Trends ============

/// Target image/video percentages. The two always sum to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMix {
    #[serde(default = "default_images_pct")]
    pub images: u8,
    #[serde(default = "default_videos_pct")]
    pub videos: u8,
}

fn default_images_pct() -> u8 {
    70
}

fn default_videos_pct() -> u8 {
    30
}

impl Default for ContentMix {
    fn default() -> Self {
        Self {
            images: default_images_pct(),
            videos: default_videos_pct(),
        }
    }
}

impl ContentMix {
    /// Move the image slider; the video share follows.
    pub fn set_images(&mut self, pct: u8) {
        self.images = pct.min(100);
        self.videos = 100 - self.images;
    }

    /// Move the video slider; the image share follows.
    pub fn set_videos(&mut self, pct: u8) {
        self.videos = pct.min(100);
        self.images = 100 - self.videos;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsights {
    #[serde(default)]
    pub common_themes: Vec<String>,
    #[serde(default)]
    pub avg_engagement: Option<String>,
}

/// A dated snapshot of hashtag and style popularity. Immutable once
/// created; the dashboard only lists them, newest first.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
    #[serde(default)]
    pub top_hashtags: Vec<String>,
    #[serde(default)]
    pub content_mix: ContentMix,
    #[serde(default)]
    pub image_post_styles: Vec<String>,
    #[serde(default)]
    pub video_post_styles: Vec<String>,
    #[serde(default)]
    pub trending_topics: Vec<String>,
    #[serde(default)]
    pub competitor_insights: Option<CompetitorInsights>,
}

// ============ Content ============

/// A generated media asset as tracked by the content pipeline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub post: Option<Post>,
}

// ============ Interactions ============

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Instagram => "📸",
            Platform::Facebook => "👥",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Comment,
    Dm,
}

impl InteractionKind {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionKind::Comment => "Comment",
            InteractionKind::Dm => "DM",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InteractionKind::Comment => "💬",
            InteractionKind::Dm => "📩",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionStatus {
    Pending,
    Responded,
    Failed,
}

impl InteractionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionStatus::Pending => "Pending",
            InteractionStatus::Responded => "Responded",
            InteractionStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            InteractionStatus::Pending => "badge bg-yellow-100 text-yellow-700",
            InteractionStatus::Responded => "badge bg-green-100 text-green-700",
            InteractionStatus::Failed => "badge bg-red-100 text-red-700",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InteractionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// An inbound comment or DM from a social-platform user. Read-only from
/// the dashboard's perspective.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub platform: Platform,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub bot_response: Option<String>,
    #[serde(default)]
    pub user: Option<InteractionUser>,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub status: InteractionStatus,
    #[serde(default)]
    pub responded_at: Option<String>,
    /// Whether the bot redirected the user to the quote form
    #[serde(default)]
    pub redirected: bool,
    #[serde(default)]
    pub post_id: Option<String>,
}

impl Interaction {
    pub fn username(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .filter(|u| !u.is_empty())
            .unwrap_or("unknown")
    }

    /// "price_inquiry" reads as "Price Inquiry".
    pub fn category_label(&self) -> String {
        let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) else {
            return "General".to_string();
        };
        category
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn category_class(&self) -> &'static str {
        match self.category.as_deref() {
            Some("price_inquiry") | Some("pricing") => "text-blue-600 bg-blue-50",
            Some("technical_question") | Some("product") => "text-purple-600 bg-purple-50",
            Some("compliment") | Some("feedback") => "text-green-600 bg-green-50",
            Some("faq") | Some("support") => "text-yellow-600 bg-yellow-50",
            _ => "text-gray-600 bg-gray-50",
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStatistics {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub responded: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub failed: u64,
}

// ============ Logs ============

/// Display severity of a log entry, derived from its type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Warning,
    Error,
    Info,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "success",
            LogStatus::Warning => "warning",
            LogStatus::Error => "error",
            LogStatus::Info => "info",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LogStatus::Success => "badge text-green-600 bg-green-50",
            LogStatus::Warning => "badge text-yellow-600 bg-yellow-50",
            LogStatus::Error => "badge text-red-600 bg-red-50",
            LogStatus::Info => "badge text-blue-600 bg-blue-50",
        }
    }
}

/// A discrete system event. Read-only, periodically refreshed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl LogEntry {
    /// Severity is inferred from substrings of the type tag; the backend
    /// does not send it explicitly.
    pub fn status(&self) -> LogStatus {
        let tag = self.event_type.to_lowercase();
        if tag.contains("error") || tag.contains("fail") {
            LogStatus::Error
        } else if tag.contains("reject") || tag.contains("skip") || tag.contains("warn") {
            LogStatus::Warning
        } else if tag.contains("approv") {
            LogStatus::Info
        } else {
            LogStatus::Success
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.event_type.as_str() {
            "content_generation" => "🎨",
            "trend_analysis" => "📊",
            "post_approved" => "✅",
            "post_rejected" => "🚫",
            "post_published" => "📤",
            "posting_skipped" => "⏭️",
            "analytics" => "📈",
            _ => "📝",
        }
    }
}

// ============ Settings ============

/// Singleton configuration object, replaced wholesale on save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Daily posting time, "HH:MM" UTC
    #[serde(default = "default_posting_time")]
    pub posting_time: String,
    #[serde(default)]
    pub content_mix: ContentMix,
    #[serde(default = "default_brand_voice")]
    pub brand_voice: String,
    #[serde(default)]
    pub auto_approval: bool,
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub trend_analysis_enabled: bool,
    #[serde(default = "default_true")]
    pub content_generation_enabled: bool,
    #[serde(default)]
    pub auto_posting_enabled: bool,
}

fn default_posting_time() -> String {
    "17:00".to_string()
}

fn default_brand_voice() -> String {
    "professional-inspirational".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            posting_time: default_posting_time(),
            content_mix: ContentMix::default(),
            brand_voice: default_brand_voice(),
            auto_approval: false,
            email_notifications: true,
            trend_analysis_enabled: true,
            content_generation_enabled: true,
            auto_posting_enabled: false,
        }
    }
}

// ============ Envelopes ============

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StatisticsEnvelope {
    #[serde(default)]
    pub statistics: PostStatistics,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostHistory {
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrendList {
    #[serde(default)]
    pub trends: Vec<TrendAnalysis>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TrendEnvelope {
    #[serde(default)]
    pub trend: Option<TrendAnalysis>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContentList {
    #[serde(default)]
    pub content: Vec<ContentItem>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContentEnvelope {
    pub content: ContentItem,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InteractionList {
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InteractionEnvelope {
    pub interaction: Interaction,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct InteractionStatsEnvelope {
    #[serde(default)]
    pub statistics: InteractionStatistics,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LogList {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingsEnvelope {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub uptime_seconds: Option<u64>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy" | "online")
    }
}

/// Generic acknowledgement for delete-style calls.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Acknowledged {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_status_parses_through_normalization() {
        assert_eq!(PostStatus::parse("Pending"), PostStatus::Pending);
        assert_eq!(PostStatus::parse("PENDING-APPROVAL"), PostStatus::Pending);
        assert_eq!(PostStatus::parse(" posted "), PostStatus::Posted);
        assert_eq!(
            PostStatus::parse("archived"),
            PostStatus::Other("archived".to_string())
        );
    }

    #[test]
    fn post_deserializes_from_backend_shape() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": "abc123",
                "postId": "2026-03-05-001",
                "type": "video",
                "status": "Pending Approval",
                "caption": "Spring refresh",
                "hashtags": ["#doors", "#renovation"],
                "mediaUrl": "https://cdn.example.com/v.mp4",
                "thumbnailUrl": "https://cdn.example.com/v.jpg",
                "fileSize": 2048576,
                "duration": 14.5,
                "generatedAt": "2026-03-05T08:15:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(post.status, PostStatus::Pending);
        assert!(post.is_video());
        assert_eq!(post.preview_url(), Some("https://cdn.example.com/v.jpg"));
        assert_eq!(post.hashtags.len(), 2);
    }

    #[test]
    fn image_posts_preview_the_media_itself() {
        let post: Post = serde_json::from_str(
            r#"{"id": "p1", "type": "image", "status": "approved",
                "mediaUrl": "https://cdn.example.com/i.jpg"}"#,
        )
        .unwrap();
        assert_eq!(post.preview_url(), Some("https://cdn.example.com/i.jpg"));
    }

    #[test]
    fn statistics_rates() {
        let stats = PostStatistics {
            total: 10,
            by_status: StatusCounts {
                pending: 2,
                approved: 3,
                rejected: 1,
                posted: 4,
            },
            by_type: TypeCounts::default(),
        };
        assert_eq!(stats.approval_rate(), 70);
        assert_eq!(stats.publishing_rate(), 40);
        assert_eq!(PostStatistics::default().approval_rate(), 0);
    }

    #[test]
    fn content_mix_always_sums_to_one_hundred() {
        let mut mix = ContentMix::default();
        assert_eq!(mix.images + mix.videos, 100);

        mix.set_images(85);
        assert_eq!((mix.images, mix.videos), (85, 15));

        mix.set_videos(60);
        assert_eq!((mix.images, mix.videos), (40, 60));

        // Out-of-range input clamps rather than breaking the invariant
        mix.set_images(250);
        assert_eq!((mix.images, mix.videos), (100, 0));
    }

    #[test]
    fn approval_outcome_messages() {
        let published: ApprovalOutcome =
            serde_json::from_str(r#"{"immediatePost": true}"#).unwrap();
        assert_eq!(published.publish_outcome(), PublishOutcome::PublishedNow);

        let failed: ApprovalOutcome = serde_json::from_str(
            r#"{"immediatePost": false, "postingError": {"code": "META_DOWN"}}"#,
        )
        .unwrap();
        assert!(matches!(
            failed.publish_outcome(),
            PublishOutcome::FailedWillRetry(_)
        ));

        let scheduled: ApprovalOutcome = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(scheduled.publish_outcome(), PublishOutcome::Scheduled);
    }

    #[test]
    fn log_status_derives_from_type_substring() {
        let entry = |event_type: &str| LogEntry {
            id: "1".into(),
            event_type: event_type.into(),
            message: String::new(),
            post_id: None,
            content_type: None,
            timestamp: None,
        };

        assert_eq!(entry("content_generation").status(), LogStatus::Success);
        assert_eq!(entry("trend_analysis").status(), LogStatus::Success);
        assert_eq!(entry("post_approved").status(), LogStatus::Info);
        assert_eq!(entry("post_rejected").status(), LogStatus::Warning);
        assert_eq!(entry("posting_skipped").status(), LogStatus::Warning);
        assert_eq!(entry("generation_failed").status(), LogStatus::Error);
        assert_eq!(entry("api_error").status(), LogStatus::Error);
    }

    #[test]
    fn interaction_labels() {
        let interaction: Interaction = serde_json::from_str(
            r#"{
                "id": "i1",
                "platform": "instagram",
                "type": "dm",
                "category": "price_inquiry",
                "userMessage": "How much for a sliding door?",
                "user": {"id": "u1", "username": "renovator88"},
                "status": "responded",
                "redirected": true
            }"#,
        )
        .unwrap();

        assert_eq!(interaction.username(), "renovator88");
        assert_eq!(interaction.category_label(), "Price Inquiry");
        assert_eq!(interaction.kind.label(), "DM");
        assert!(interaction.redirected);

        let bare: Interaction = serde_json::from_str(
            r#"{"id": "i2", "platform": "facebook", "type": "comment", "status": "pending"}"#,
        )
        .unwrap();
        assert_eq!(bare.username(), "unknown");
        assert_eq!(bare.category_label(), "General");
    }

    #[test]
    fn settings_round_trip_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.content_mix.images + settings.content_mix.videos, 100);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["postingTime"], "17:00");
        assert_eq!(json["contentMix"]["images"], 70);
        assert_eq!(json["autoApproval"], false);
    }

    #[test]
    fn list_envelopes_tolerate_missing_fields() {
        let posts: PostList = serde_json::from_str(r#"{"posts": []}"#).unwrap();
        assert_eq!(posts.count, 0);

        let trend: TrendEnvelope = serde_json::from_str(r#"{}"#).unwrap();
        assert!(trend.trend.is_none());
    }
}
