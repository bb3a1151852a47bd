//! Argument lists, in the order the remote program declares them.

use super::errors::BuildError;
use super::limits::*;
use serde::{Deserialize, Serialize};
use shared_types::Lamports;
use tl_01_wire_codec::{ByteWriter, Encode, EncodeError};

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), BuildError> {
    if value.len() > max {
        return Err(BuildError::invalid(
            field,
            format!("{} bytes exceeds the limit of {max}", value.len()),
        ));
    }
    Ok(())
}

fn check_present(field: &'static str, value: &str) -> Result<(), BuildError> {
    if value.trim().is_empty() {
        return Err(BuildError::MissingArgument { field });
    }
    Ok(())
}

fn check_skills(skills: &[String]) -> Result<(), BuildError> {
    if skills.len() > MAX_SKILLS {
        return Err(BuildError::invalid(
            "skills",
            format!("{} entries exceeds the limit of {MAX_SKILLS}", skills.len()),
        ));
    }
    Ok(())
}

fn check_rating(rating: u8) -> Result<(), BuildError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(BuildError::invalid(
            "rating",
            format!("{rating} is outside {MIN_RATING}..={MAX_RATING}"),
        ));
    }
    Ok(())
}

fn write_strings(writer: &mut ByteWriter, items: &[String]) -> Result<(), EncodeError> {
    writer.write_seq(items, |w, s| w.write_str(s).map(|_| ()))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeArgs {
    pub fee_bps: u16,
}

impl InitializeArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        if u64::from(self.fee_bps) > tl_03_record_schemas::BPS_DENOMINATOR {
            return Err(BuildError::invalid("fee_bps", "fee cannot exceed 100%"));
        }
        Ok(())
    }
}

impl Encode for InitializeArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_u16(self.fee_bps);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterActorArgs {
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub hourly_rate: Lamports,
}

impl RegisterActorArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        check_present("name", &self.name)?;
        check_len("name", &self.name, MAX_NAME_LEN)?;
        check_len("bio", &self.bio, MAX_BIO_LEN)?;
        check_skills(&self.skills)
    }
}

impl Encode for RegisterActorArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(&self.name)?.write_str(&self.bio)?;
        write_strings(writer, &self.skills)?;
        writer.write_u64(self.hourly_rate);
        Ok(())
    }
}

/// Every field is optional; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateActorArgs {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub hourly_rate: Option<Lamports>,
    pub active: Option<bool>,
}

impl UpdateActorArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        if let Some(name) = &self.name {
            check_present("name", name)?;
            check_len("name", name, MAX_NAME_LEN)?;
        }
        if let Some(bio) = &self.bio {
            check_len("bio", bio, MAX_BIO_LEN)?;
        }
        if let Some(skills) = &self.skills {
            check_skills(skills)?;
        }
        Ok(())
    }
}

impl Encode for UpdateActorArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_option(self.name.as_deref(), |w, s| w.write_str(s).map(|_| ()))?
            .write_option(self.bio.as_deref(), |w, s| w.write_str(s).map(|_| ()))?
            .write_option(self.skills.as_deref(), write_strings)?
            .write_option(self.hourly_rate.as_ref(), |w, r| {
                w.write_u64(*r);
                Ok(())
            })?
            .write_option(self.active.as_ref(), |w, a| {
                w.write_bool(*a);
                Ok(())
            })?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkItemArgs {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub category: String,
    pub reward: Lamports,
    pub deadline_hours: u64,
}

impl CreateWorkItemArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        check_present("title", &self.title)?;
        check_len("title", &self.title, MAX_TITLE_LEN)?;
        check_len("description", &self.description, MAX_DESCRIPTION_LEN)?;
        if self.reward == 0 {
            return Err(BuildError::invalid("reward", "must be greater than zero"));
        }
        if !(MIN_DEADLINE_HOURS..=MAX_DEADLINE_HOURS).contains(&self.deadline_hours) {
            return Err(BuildError::invalid(
                "deadline_hours",
                format!(
                    "{} is outside {MIN_DEADLINE_HOURS}..={MAX_DEADLINE_HOURS}",
                    self.deadline_hours
                ),
            ));
        }
        Ok(())
    }
}

impl Encode for CreateWorkItemArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_str(&self.title)?
            .write_str(&self.description)?
            .write_str(&self.requirements)?
            .write_str(&self.category)?
            .write_u64(self.reward)
            .write_u64(self.deadline_hours);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitWorkArgs {
    pub url: String,
    pub notes: String,
}

impl SubmitWorkArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        check_present("url", &self.url)?;
        check_len("url", &self.url, MAX_URL_LEN)
    }
}

impl Encode for SubmitWorkArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(&self.url)?.write_str(&self.notes)?;
        Ok(())
    }
}

/// Same wire shape as [`SubmitWorkArgs`].
pub type SubmitApplicationArgs = SubmitWorkArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveWorkArgs {
    pub rating: u8,
}

impl ApproveWorkArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        check_rating(self.rating)
    }
}

impl Encode for ApproveWorkArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_u8(self.rating);
        Ok(())
    }
}

/// Same wire shape as [`ApproveWorkArgs`].
pub type SelectWinnerArgs = ApproveWorkArgs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectWorkArgs {
    pub reason: String,
}

impl RejectWorkArgs {
    pub fn validate(&self) -> Result<(), BuildError> {
        check_present("reason", &self.reason)
    }
}

impl Encode for RejectWorkArgs {
    fn encode(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_str(&self.reason)?;
        Ok(())
    }
}
