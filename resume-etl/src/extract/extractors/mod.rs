pub mod docx;
pub mod image;
pub mod pdf;
pub mod text;

pub use docx::DocxExtractor;
pub use image::ImageExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;
