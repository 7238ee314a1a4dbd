//! Plain text rendering for resumes and section maps.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::Resume;
use crate::parser::SectionMap;

fn push_field(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    if value.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}: {}", label, value)
}

fn push_descriptions(out: &mut String, descriptions: &[String]) -> std::fmt::Result {
    for description in descriptions {
        writeln!(out, "  - {}", description)?;
    }
    Ok(())
}

fn push_heading(out: &mut String, title: &str) -> std::fmt::Result {
    if !out.is_empty() {
        out.push('\n');
    }
    writeln!(out, "{}", title.to_uppercase())
}

fn write_resume(out: &mut String, resume: &Resume) -> std::fmt::Result {
    let profile = &resume.profile;
    push_field(out, "Name", &profile.name)?;
    push_field(out, "Email", &profile.email)?;
    push_field(out, "Phone", &profile.phone)?;
    push_field(out, "Location", &profile.location)?;
    push_field(out, "URL", &profile.url)?;
    push_field(out, "Summary", &profile.summary)?;

    if !resume.educations.is_empty() {
        push_heading(out, "Education")?;
        for education in &resume.educations {
            writeln!(out, "[{}] {}", education.education_type, education.school)?;
            push_field(out, "  Degree", &education.degree)?;
            push_field(out, "  GPA", &education.gpa)?;
            push_field(out, "  Date", &education.date)?;
            push_descriptions(out, &education.descriptions)?;
        }
    }

    if !resume.work_experiences.is_empty() {
        push_heading(out, "Work Experience")?;
        for job in &resume.work_experiences {
            writeln!(out, "{}", job.company)?;
            push_field(out, "  Title", &job.job_title)?;
            push_field(out, "  Date", &job.date)?;
            push_descriptions(out, &job.descriptions)?;
        }
    }

    if !resume.projects.is_empty() {
        push_heading(out, "Projects")?;
        for project in &resume.projects {
            writeln!(out, "{}", project.project)?;
            push_field(out, "  Date", &project.date)?;
            push_descriptions(out, &project.descriptions)?;
        }
    }

    let skills = &resume.skills;
    let featured = skills.featured_names();
    if !featured.is_empty() || !skills.descriptions.is_empty() || !skills.known_skills.is_empty() {
        push_heading(out, "Skills")?;
        push_field(out, "Featured", &featured.join(", "))?;
        push_descriptions(out, &skills.descriptions)?;
        push_field(out, "Known", &skills.known_skills.join(", "))?;
    }

    if !resume.certifications.is_empty() {
        push_heading(out, "Certifications")?;
        for certification in &resume.certifications {
            writeln!(out, "{}", certification.name)?;
            push_field(out, "  Date", &certification.date)?;
            push_descriptions(out, &certification.descriptions)?;
        }
    }

    Ok(())
}

/// Render a human-readable summary of a resume.
///
/// Empty fields and categories are left out.
pub fn to_text(resume: &Resume) -> Result<String> {
    let mut output = String::new();
    write_resume(&mut output, resume)
        .map_err(|e| Error::Render(format!("Text rendering error: {}", e)))?;
    Ok(output.trim_end().to_string())
}

/// Render the section grouping, one block per section, for debugging.
pub fn sections_to_text(sections: &SectionMap) -> String {
    let mut output = String::new();
    for section in sections.sections() {
        output.push_str(&format!("== {} ({} lines)\n", section.key, section.lines.len()));
        for line in &section.lines {
            output.push_str(&format!("   {}\n", line.text()));
        }
    }
    output
}
