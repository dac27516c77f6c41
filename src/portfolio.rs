use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

use crate::i18n::Lang;

#[cfg(feature = "ssr")]
pub static GLOBAL_DATA_CACHE: LazyLock<DashMap<String, PortfolioData>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "data"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

/// The one data document driving the whole page.
pub const DATA_PATH: &str = "portfolio.json";

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A text attribute carried in both supported languages. The view picks
/// one variant at render time; the document always ships both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bilingual {
    pub de: String,
    pub en: String,
}

impl Bilingual {
    pub fn pick(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.de,
            Lang::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub linkedin: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub github: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Downloadables {
    pub lebenslauf_pdf: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub role: Bilingual,
    pub photo: String,
    pub youtube_about: String,
    pub skills: Vec<String>,
    pub contact: Contact,
    pub downloadables: Downloadables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertCategory {
    Professional,
    Education,
    Language,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertModule {
    pub id: String,
    pub title_de: String,
    pub title_en: String,
    pub short_de: String,
    pub short_en: String,
    pub date: NaiveDate,
    pub issuer: String,
    pub thumbnail: String,
    pub pdf: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub category_tag: Option<String>,
}

impl CertModule {
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.title_de,
            Lang::En => &self.title_en,
        }
    }

    pub fn summary(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.short_de,
            Lang::En => &self.short_en,
        }
    }

    /// Modules still in progress have no viewable document.
    pub fn is_in_progress(&self) -> bool {
        self.status.as_deref() == Some("in_progress")
    }

    pub fn category(&self) -> CertCategory {
        match self.category_tag.as_deref() {
            Some("Professional") => CertCategory::Professional,
            Some("Education") => CertCategory::Education,
            Some("Language") => CertCategory::Language,
            _ => CertCategory::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificateGroup {
    pub id: String,
    pub title_de: String,
    pub title_en: String,
    pub description_de: String,
    pub description_en: String,
    pub modules: Vec<CertModule>,
    pub issuer: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl CertificateGroup {
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.title_de,
            Lang::En => &self.title_en,
        }
    }

    pub fn description(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.description_de,
            Lang::En => &self.description_en,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: Bilingual,
    pub tech_tags: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub screenshot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioData {
    pub candidate: Candidate,
    pub certificate_groups: Vec<CertificateGroup>,
    pub standalone_certificates: Vec<CertModule>,
    pub projects: Vec<Project>,
}

#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    #[error("Portfolio document not found")]
    NotFound,
    #[error("Couldn't parse portfolio document")]
    Parse,
}

#[cfg(feature = "ssr")]
pub async fn load() -> Result<PortfolioData, PortfolioError> {
    let cache = &*GLOBAL_DATA_CACHE;
    if let Some(data) = cache.get(DATA_PATH) {
        return Ok(data.clone());
    }
    let raw = Assets::get(DATA_PATH).ok_or(PortfolioError::NotFound)?;
    let data: PortfolioData =
        serde_json::from_slice(&raw.data).map_err(|_| PortfolioError::Parse)?;
    cache.insert(DATA_PATH.to_string(), data.clone());
    Ok(data)
}

/// Split the standalone certificates into the two rendered sub-lists:
/// professional, and education together with language. Input order is kept.
pub fn partition_standalone(modules: &[CertModule]) -> (Vec<CertModule>, Vec<CertModule>) {
    let professional = modules
        .iter()
        .filter(|m| m.category() == CertCategory::Professional)
        .cloned()
        .collect();
    let education = modules
        .iter()
        .filter(|m| matches!(m.category(), CertCategory::Education | CertCategory::Language))
        .cloned()
        .collect();
    (professional, education)
}

/// Rewrite a share-style or direct watch URL to the privacy-enhanced embed
/// endpoint. Returns `None` when no video id can be extracted; the caller
/// hides the embed in that case.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let tail = url
        .split_once("youtu.be/")
        .or_else(|| url.split_once("v="))
        .map(|(_, tail)| tail)?;
    let id = tail.split(['?', '&', '/']).next().unwrap_or_default();
    if id.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.youtube-nocookie.com/embed/{id}?rel=0&modestbranding=1"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "candidate": {
            "name": "Jane Doe",
            "role": {"de": "Entwicklerin", "en": "Developer"},
            "photo": "/images/jane.jpg",
            "youtube_about": "https://youtu.be/abc123XYZ?si=tracker",
            "skills": ["HTML", "CSS", "JavaScript", "React", "Docker"],
            "contact": {
                "linkedin": "https://linkedin.com/in/jane",
                "email": "jane@example.com",
                "phone": "+49123456789",
                "whatsapp": "https://wa.me/49123456789",
                "github": "https://github.com/jane"
            },
            "downloadables": {"lebenslauf_pdf": "/docs/cv.pdf"}
        },
        "certificate_groups": [{
            "id": "fullstack",
            "title_de": "Fullstack-Programm",
            "title_en": "Fullstack Program",
            "description_de": "Mehrteiliges Programm",
            "description_en": "Multi-module program",
            "issuer": "Acme Academy",
            "modules": [{
                "id": "m1",
                "title_de": "Modul Eins",
                "title_en": "Module One",
                "short_de": "Grundlagen",
                "short_en": "Basics",
                "date": "2024-03-01",
                "issuer": "Acme Academy",
                "thumbnail": "/images/m1.png",
                "pdf": "/docs/m1.pdf"
            }]
        }],
        "standalone_certificates": [
            {
                "id": "aws",
                "title_de": "AWS Zertifikat",
                "title_en": "AWS Certificate",
                "short_de": "Cloud",
                "short_en": "Cloud",
                "date": "2024-06-15",
                "issuer": "AWS",
                "thumbnail": "/images/aws.png",
                "pdf": "/docs/aws.pdf",
                "type": "Professional"
            },
            {
                "id": "b2",
                "title_de": "Deutsch B2",
                "title_en": "German B2",
                "short_de": "Sprachzertifikat",
                "short_en": "Language certificate",
                "date": "2023-11-02",
                "issuer": "Goethe-Institut",
                "thumbnail": "/images/b2.png",
                "pdf": "/docs/b2.pdf",
                "type": "Language",
                "status": "in_progress"
            },
            {
                "id": "abitur",
                "title_de": "Abitur",
                "title_en": "High school diploma",
                "short_de": "Schulabschluss",
                "short_en": "School diploma",
                "date": "2019-07-01",
                "issuer": "Gymnasium",
                "thumbnail": "/images/abi.png",
                "pdf": "/docs/abi.pdf",
                "type": "Education"
            }
        ],
        "projects": [{
            "id": "shop",
            "title": "Webshop",
            "short_description": {"de": "Ein Shop", "en": "A shop"},
            "tech_tags": ["React", "Node.js"],
            "github_url": "https://github.com/jane/shop",
            "live_url": "https://shop.example.com",
            "screenshot": "/images/shop.png"
        }]
    }"#;

    fn sample() -> PortfolioData {
        serde_json::from_str(SAMPLE).expect("sample document should parse")
    }

    #[test]
    fn test_parse_full_document() {
        let data = sample();
        assert_eq!(data.candidate.name, "Jane Doe");
        assert_eq!(data.certificate_groups.len(), 1);
        assert_eq!(data.certificate_groups[0].modules.len(), 1);
        assert_eq!(data.standalone_certificates.len(), 3);
        assert_eq!(data.projects.len(), 1);
        assert_eq!(
            data.candidate.contact.whatsapp.as_deref(),
            Some("https://wa.me/49123456789")
        );
    }

    #[test]
    fn test_whatsapp_is_optional() {
        let mut doc: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        doc["candidate"]["contact"]
            .as_object_mut()
            .unwrap()
            .remove("whatsapp");
        let data: PortfolioData = serde_json::from_value(doc).expect("should parse");
        assert!(data.candidate.contact.whatsapp.is_none());
    }

    #[test]
    fn test_bilingual_pick() {
        let role = Bilingual {
            de: "Entwicklerin".to_string(),
            en: "Developer".to_string(),
        };
        assert_eq!(role.pick(Lang::De), "Entwicklerin");
        assert_eq!(role.pick(Lang::En), "Developer");
    }

    #[test]
    fn test_in_progress_status() {
        let data = sample();
        let b2 = &data.standalone_certificates[1];
        assert!(b2.is_in_progress());
        let aws = &data.standalone_certificates[0];
        assert!(!aws.is_in_progress());
        // No status field at all is not in progress either.
        let module = &data.certificate_groups[0].modules[0];
        assert!(!module.is_in_progress());
    }

    #[test]
    fn test_category_tags() {
        let data = sample();
        assert_eq!(
            data.standalone_certificates[0].category(),
            CertCategory::Professional
        );
        assert_eq!(
            data.standalone_certificates[1].category(),
            CertCategory::Language
        );
        assert_eq!(
            data.standalone_certificates[2].category(),
            CertCategory::Education
        );
        assert_eq!(
            data.certificate_groups[0].modules[0].category(),
            CertCategory::Other
        );
    }

    #[test]
    fn test_partition_keeps_order() {
        let data = sample();
        let (professional, education) = partition_standalone(&data.standalone_certificates);
        assert_eq!(professional.len(), 1);
        assert_eq!(professional[0].id, "aws");
        // Language and Education land in the same list, input order kept.
        assert_eq!(education.len(), 2);
        assert_eq!(education[0].id, "b2");
        assert_eq!(education[1].id, "abitur");
    }

    #[test]
    fn test_youtube_share_url() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/abc123XYZ?si=tracker").as_deref(),
            Some("https://www.youtube-nocookie.com/embed/abc123XYZ?rel=0&modestbranding=1")
        );
    }

    #[test]
    fn test_youtube_watch_url() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123XYZ&t=10s").as_deref(),
            Some("https://www.youtube-nocookie.com/embed/abc123XYZ?rel=0&modestbranding=1")
        );
    }

    #[test]
    fn test_youtube_unrecognized_url() {
        assert!(youtube_embed_url("https://example.com/video").is_none());
        assert!(youtube_embed_url("https://youtu.be/").is_none());
    }

    #[test]
    fn test_module_date_parses() {
        let data = sample();
        let aws = &data.standalone_certificates[0];
        assert_eq!(aws.date.format("%b %Y").to_string(), "Jun 2024");
    }
}
