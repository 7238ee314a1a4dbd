//! Typed field updates for user edits.
//!
//! Every edit replaces a whole field value. Applying an update never touches
//! the original record; a new [`Resume`] is returned.

use crate::error::{Error, Result};

use super::resume::{
    EducationType, FeaturedSkill, Resume, ResumeCertification, ResumeEducation, ResumeProfile,
    ResumeProject, ResumeWorkExperience, FEATURED_SKILL_SLOTS,
};

/// An edit to a resume.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeUpdate {
    /// Replace a profile field
    Profile(ProfileField),
    /// Replace a field of one education entry
    Education { index: usize, field: EducationField },
    /// Replace a field of one work experience entry
    WorkExperience {
        index: usize,
        field: WorkExperienceField,
    },
    /// Replace a field of one project entry
    Project { index: usize, field: ProjectField },
    /// Replace a field of one certification entry
    Certification {
        index: usize,
        field: CertificationField,
    },
    /// Replace a skills field
    Skills(SkillsField),
    /// Append an entry
    Add(NewEntry),
    /// Remove an entry
    Remove { kind: EntryKind, index: usize },
}

/// Profile field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Name(String),
    Email(String),
    Phone(String),
    Location(String),
    Url(String),
    Summary(String),
}

/// Education field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationField {
    School(String),
    Degree(String),
    Gpa(String),
    Date(String),
    Descriptions(Vec<String>),
    EducationType(EducationType),
}

/// Work experience field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkExperienceField {
    Company(String),
    JobTitle(String),
    Date(String),
    Descriptions(Vec<String>),
}

/// Project field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectField {
    Project(String),
    Date(String),
    Descriptions(Vec<String>),
}

/// Certification field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificationField {
    Name(String),
    Date(String),
    Descriptions(Vec<String>),
}

/// Skills field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsField {
    /// Replace one featured skill slot
    Featured { slot: usize, skill: FeaturedSkill },
    Descriptions(Vec<String>),
}

/// A new list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntry {
    Education(ResumeEducation),
    WorkExperience(ResumeWorkExperience),
    Project(ResumeProject),
    Certification(ResumeCertification),
}

/// Kind of list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Education,
    WorkExperience,
    Project,
    Certification,
}

impl EntryKind {
    fn label(&self) -> &'static str {
        match self {
            EntryKind::Education => "education",
            EntryKind::WorkExperience => "work experience",
            EntryKind::Project => "project",
            EntryKind::Certification => "certification",
        }
    }
}

fn entry_mut<'a, T>(items: &'a mut [T], kind: EntryKind, index: usize) -> Result<&'a mut T> {
    let len = items.len();
    items.get_mut(index).ok_or(Error::IndexOutOfRange {
        kind: kind.label(),
        index,
        len,
    })
}

fn remove_entry<T>(items: &mut Vec<T>, kind: EntryKind, index: usize) -> Result<()> {
    if index >= items.len() {
        return Err(Error::IndexOutOfRange {
            kind: kind.label(),
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(())
}

impl ResumeProfile {
    fn set(&mut self, field: ProfileField) {
        match field {
            ProfileField::Name(v) => self.name = v,
            ProfileField::Email(v) => self.email = v,
            ProfileField::Phone(v) => self.phone = v,
            ProfileField::Location(v) => self.location = v,
            ProfileField::Url(v) => self.url = v,
            ProfileField::Summary(v) => self.summary = v,
        }
    }
}

impl ResumeEducation {
    fn set(&mut self, field: EducationField) {
        match field {
            EducationField::School(v) => self.school = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::Gpa(v) => self.gpa = v,
            EducationField::Date(v) => self.date = v,
            EducationField::Descriptions(v) => self.descriptions = v,
            EducationField::EducationType(v) => self.education_type = v,
        }
    }
}

impl ResumeWorkExperience {
    fn set(&mut self, field: WorkExperienceField) {
        match field {
            WorkExperienceField::Company(v) => self.company = v,
            WorkExperienceField::JobTitle(v) => self.job_title = v,
            WorkExperienceField::Date(v) => self.date = v,
            WorkExperienceField::Descriptions(v) => self.descriptions = v,
        }
    }
}

impl ResumeProject {
    fn set(&mut self, field: ProjectField) {
        match field {
            ProjectField::Project(v) => self.project = v,
            ProjectField::Date(v) => self.date = v,
            ProjectField::Descriptions(v) => self.descriptions = v,
        }
    }
}

impl ResumeCertification {
    fn set(&mut self, field: CertificationField) {
        match field {
            CertificationField::Name(v) => self.name = v,
            CertificationField::Date(v) => self.date = v,
            CertificationField::Descriptions(v) => self.descriptions = v,
        }
    }
}

impl Resume {
    /// Apply an edit and return the updated resume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when the update addresses an entry
    /// or featured skill slot that does not exist.
    pub fn apply(&self, update: ResumeUpdate) -> Result<Resume> {
        let mut next = self.clone();
        match update {
            ResumeUpdate::Profile(field) => next.profile.set(field),
            ResumeUpdate::Education { index, field } => {
                entry_mut(&mut next.educations, EntryKind::Education, index)?.set(field)
            }
            ResumeUpdate::WorkExperience { index, field } => {
                entry_mut(&mut next.work_experiences, EntryKind::WorkExperience, index)?.set(field)
            }
            ResumeUpdate::Project { index, field } => {
                entry_mut(&mut next.projects, EntryKind::Project, index)?.set(field)
            }
            ResumeUpdate::Certification { index, field } => {
                entry_mut(&mut next.certifications, EntryKind::Certification, index)?.set(field)
            }
            ResumeUpdate::Skills(SkillsField::Featured { slot, skill }) => {
                let slot_ref =
                    next.skills
                        .featured_skills
                        .get_mut(slot)
                        .ok_or(Error::IndexOutOfRange {
                            kind: "featured skill",
                            index: slot,
                            len: FEATURED_SKILL_SLOTS,
                        })?;
                *slot_ref = skill;
            }
            ResumeUpdate::Skills(SkillsField::Descriptions(v)) => next.skills.descriptions = v,
            ResumeUpdate::Add(entry) => match entry {
                NewEntry::Education(e) => next.educations.push(e),
                NewEntry::WorkExperience(e) => next.work_experiences.push(e),
                NewEntry::Project(e) => next.projects.push(e),
                NewEntry::Certification(e) => next.certifications.push(e),
            },
            ResumeUpdate::Remove { kind, index } => match kind {
                EntryKind::Education => remove_entry(&mut next.educations, kind, index)?,
                EntryKind::WorkExperience => {
                    remove_entry(&mut next.work_experiences, kind, index)?
                }
                EntryKind::Project => remove_entry(&mut next.projects, kind, index)?,
                EntryKind::Certification => remove_entry(&mut next.certifications, kind, index)?,
            },
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_profile_update_leaves_original_untouched() {
        let resume = Resume::default();
        let updated = resume
            .apply(ResumeUpdate::Profile(ProfileField::Name(
                "Ada Lovelace".to_string(),
            )))
            .unwrap();

        assert_eq!(updated.profile.name, "Ada Lovelace");
        assert_eq!(resume.profile.name, "");
    }

    #[test]
    fn test_apply_education_update() {
        let resume = Resume::default()
            .apply(ResumeUpdate::Add(NewEntry::Education(
                ResumeEducation::default(),
            )))
            .unwrap();

        let updated = resume
            .apply(ResumeUpdate::Education {
                index: 0,
                field: EducationField::EducationType(EducationType::Class12),
            })
            .unwrap();
        assert_eq!(updated.educations[0].education_type, EducationType::Class12);
    }

    #[test]
    fn test_apply_out_of_range() {
        let resume = Resume::default();
        let err = resume
            .apply(ResumeUpdate::WorkExperience {
                index: 2,
                field: WorkExperienceField::Company("Acme".to_string()),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::IndexOutOfRange {
                index: 2,
                len: 0,
                ..
            }
        ));

        let err = resume
            .apply(ResumeUpdate::Skills(SkillsField::Featured {
                slot: FEATURED_SKILL_SLOTS,
                skill: FeaturedSkill::new("Rust"),
            }))
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_apply_remove() {
        let resume = Resume::default()
            .apply(ResumeUpdate::Add(NewEntry::Project(ResumeProject {
                project: "Compiler".to_string(),
                ..Default::default()
            })))
            .unwrap();
        assert_eq!(resume.projects.len(), 1);

        let removed = resume
            .apply(ResumeUpdate::Remove {
                kind: EntryKind::Project,
                index: 0,
            })
            .unwrap();
        assert!(removed.projects.is_empty());
        assert_eq!(resume.projects.len(), 1);
    }

    #[test]
    fn test_apply_featured_skill() {
        let resume = Resume::default()
            .apply(ResumeUpdate::Skills(SkillsField::Featured {
                slot: 1,
                skill: FeaturedSkill {
                    skill: "Rust".to_string(),
                    rating: 5,
                },
            }))
            .unwrap();
        assert_eq!(resume.skills.featured_names(), vec!["Rust"]);
        assert_eq!(resume.skills.featured_skills[1].rating, 5);
    }
}
