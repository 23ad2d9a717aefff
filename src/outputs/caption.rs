//! Instagram caption generation.
//!
//! The caption is plain text meant to be copy-pasted under the post. It is
//! written to `caption.txt` in the output directory, replacing the previous
//! run's caption.

use crate::config::Branding;
use crate::models::Article;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const RULE: &str = "━━━━━━━━━━━━━━━";

/// Render the caption for `article` with the account's branding.
pub fn build_caption(article: &Article, branding: &Branding) -> String {
    format!(
        "🚨 BREAKING NEWS\n\n{title}\n\n{RULE}\n📰 Source: {source}\n🔗 Full story: {link}\n{RULE}\n\n{tagline}\n\n{hashtags}",
        title = article.title,
        source = article.source,
        link = article.link,
        tagline = branding.tagline,
        hashtags = branding.hashtags.join(" "),
    )
}

/// Write `caption` to `<output_dir>/caption.txt` and return the path.
#[instrument(level = "info", skip_all, fields(%output_dir))]
pub async fn write_caption(caption: &str, output_dir: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(output_dir).join("caption.txt");
    fs::write(&path, caption).await?;
    info!(path = %path.display(), bytes = caption.len(), "Wrote caption");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            title: "Telangana CM announces new metro line".to_string(),
            link: "https://news.google.com/rss/articles/abc".to_string(),
            source: "The Hindu".to_string(),
            category: "hyderabad".to_string(),
            published: None,
        }
    }

    #[test]
    fn test_caption_layout() {
        let caption = build_caption(&article(), &Branding::default());
        let lines: Vec<&str> = caption.lines().collect();
        assert_eq!(lines[0], "🚨 BREAKING NEWS");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Telangana CM announces new metro line");
        assert_eq!(lines[4], RULE);
        assert_eq!(lines[5], "📰 Source: The Hindu");
        assert_eq!(lines[6], "🔗 Full story: https://news.google.com/rss/articles/abc");
        assert_eq!(lines[7], RULE);
        assert_eq!(lines[9], "Stay updated with Hyderabad's latest news ⚡");
        assert!(lines[11].starts_with("#HyderabadNews #Hyderabad #Telangana"));
        assert!(lines[11].ends_with("#InstantNews"));
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_caption_uses_custom_branding() {
        let branding = Branding {
            tagline: "Follow for more".to_string(),
            hashtags: vec!["#One".to_string(), "#Two".to_string()],
            ..Branding::default()
        };
        let caption = build_caption(&article(), &branding);
        assert!(caption.contains("\n\nFollow for more\n\n#One #Two"));
        assert!(caption.ends_with("#One #Two"));
    }

    #[tokio::test]
    async fn test_write_caption() {
        let dir = std::env::temp_dir().join(format!("hyd_alerts_caption_{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let dir_str = dir.to_str().unwrap();

        let path = write_caption("hello caption", dir_str).await.unwrap();
        assert_eq!(path, dir.join("caption.txt"));
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "hello caption");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
