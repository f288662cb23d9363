pub mod resume;

pub use resume::{
    BasicDetails, EducationEntry, ExperienceEntry, LanguageEntry, Record, ResumeDocument,
};
