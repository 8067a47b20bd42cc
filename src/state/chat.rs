#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::GeneratedImage;

/// Number of images that can be requested per prompt.
pub const MIN_IMAGE_COUNT: u32 = 1;
pub const MAX_IMAGE_COUNT: u32 = 4;

/// Maximum accepted reference-image upload size in bytes.
pub const MAX_REFERENCE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// A named visual style applied to the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePreset {
    pub name: &'static str,
    pub thumbnail: &'static str,
}

/// Output dimensions offered by the size selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
    pub aspect: &'static str,
}

pub const SIZE_PRESETS: [ImageSize; 4] = [
    ImageSize { width: 1024, height: 1024, label: "Square (1:1)", aspect: "1:1" },
    ImageSize { width: 1024, height: 1792, label: "Portrait (9:16)", aspect: "9:16" },
    ImageSize { width: 1792, height: 1024, label: "Landscape (16:9)", aspect: "16:9" },
    ImageSize { width: 1536, height: 1024, label: "Wide (3:2)", aspect: "3:2" },
];

pub const STYLE_PRESETS: [StylePreset; 15] = [
    StylePreset { name: "Realistic", thumbnail: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop" },
    StylePreset { name: "Anime", thumbnail: "https://images.unsplash.com/photo-1578632767115-351597cf2477?w=400&h=400&fit=crop" },
    StylePreset { name: "Digital Art", thumbnail: "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?w=400&h=400&fit=crop" },
    StylePreset { name: "Oil Painting", thumbnail: "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=400&h=400&fit=crop" },
    StylePreset { name: "Watercolor", thumbnail: "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?w=400&h=400&fit=crop" },
    StylePreset { name: "Sketch", thumbnail: "https://images.unsplash.com/photo-1618172193622-ae2d025f4032?w=400&h=400&fit=crop" },
    StylePreset { name: "3D Render", thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=400&fit=crop" },
    StylePreset { name: "Cyberpunk", thumbnail: "https://images.unsplash.com/photo-1635236066444-e4d0fe6c4fc5?w=400&h=400&fit=crop" },
    StylePreset { name: "Fantasy", thumbnail: "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=400&h=400&fit=crop" },
    StylePreset { name: "Minimalist", thumbnail: "https://images.unsplash.com/photo-1557672172-298e090bd0f1?w=400&h=400&fit=crop" },
    StylePreset { name: "Vintage", thumbnail: "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?w=400&h=400&fit=crop" },
    StylePreset { name: "Neon", thumbnail: "https://images.unsplash.com/photo-1617791160505-6f00504e3519?w=400&h=400&fit=crop" },
    StylePreset { name: "Comic Book", thumbnail: "https://images.unsplash.com/photo-1612036782180-6f0b6cd846fe?w=400&h=400&fit=crop" },
    StylePreset { name: "Impressionist", thumbnail: "https://images.unsplash.com/photo-1577083553790-0a6ee8448ec3?w=400&h=400&fit=crop" },
    StylePreset { name: "Abstract", thumbnail: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=400&h=400&fit=crop" },
];

/// Progress of one prompt in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationStatus {
    Creating,
    Completed(Vec<GeneratedImage>),
}

/// One transcript entry: the user's prompt and its generation status.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub prompt: String,
    pub status: GenerationStatus,
}

/// State for the studio chat: the transcript plus the pending selections
/// that shape the next request.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub generating: bool,
    pub selected_style: Option<StylePreset>,
    pub selected_size: ImageSize,
    pub image_count: u32,
    pub reference_image: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            generating: false,
            selected_style: None,
            selected_size: SIZE_PRESETS[0],
            image_count: MIN_IMAGE_COUNT,
            reference_image: None,
        }
    }
}

impl ChatState {
    /// The prompt actually sent to the backend: the user's text plus a
    /// style suffix when a style is selected.
    pub fn final_prompt(&self, prompt: &str) -> String {
        match self.selected_style {
            Some(style) => format!("{prompt} in {} style", style.name),
            None => prompt.to_owned(),
        }
    }

    /// Clamp and store the requested image count.
    pub fn set_image_count(&mut self, count: u32) {
        self.image_count = count.clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT);
    }

    /// Append a pending entry for `prompt` and mark generation in flight.
    pub fn begin_generation(&mut self, prompt: String) {
        self.entries.push(ChatEntry { prompt, status: GenerationStatus::Creating });
        self.generating = true;
    }

    /// Resolve the in-flight entry with the returned image URLs.
    ///
    /// Stamps each image with the final prompt, selected style, and size,
    /// then clears the one-shot selections (style, reference image).
    pub fn complete_generation(&mut self, final_prompt: &str, urls: Vec<String>, now: f64) {
        let style = self.selected_style.map(|s| s.name.to_owned());
        let size_label = self.selected_size.label.to_owned();
        let images = urls
            .into_iter()
            .map(|url| GeneratedImage {
                id: uuid::Uuid::new_v4().to_string(),
                url,
                prompt: final_prompt.to_owned(),
                style: style.clone(),
                size_label: size_label.clone(),
                created_at: now,
            })
            .collect();

        if let Some(last) = self.entries.last_mut() {
            last.status = GenerationStatus::Completed(images);
        }
        self.generating = false;
        self.selected_style = None;
        self.reference_image = None;
    }

    /// Roll back the pending entry after a failed request.
    pub fn fail_generation(&mut self) {
        if matches!(self.entries.last(), Some(e) if e.status == GenerationStatus::Creating) {
            self.entries.pop();
        }
        self.generating = false;
    }

    /// Remove the whole transcript along with the one-shot selections.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected_style = None;
        self.reference_image = None;
    }
}
