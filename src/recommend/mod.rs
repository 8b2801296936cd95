pub mod summarizer;
