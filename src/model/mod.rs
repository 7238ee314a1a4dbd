//! Data model types for resume structure inference.
//!
//! [`TextItem`] is the pipeline input handed over by a PDF text layer;
//! [`Resume`] is the structured output. The update types express user edits
//! as a closed set of whole-field replacements.

mod resume;
mod text_item;
mod update;

pub use resume::{
    EducationType, FeaturedSkill, Resume, ResumeCertification, ResumeEducation, ResumeProfile,
    ResumeProject, ResumeSkills, ResumeWorkExperience, DEFAULT_SKILL_RATING,
    FEATURED_SKILL_SLOTS,
};
pub use text_item::TextItem;
pub use update::{
    CertificationField, EducationField, EntryKind, NewEntry, ProfileField, ProjectField,
    ResumeUpdate, SkillsField, WorkExperienceField,
};
