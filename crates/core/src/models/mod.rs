//! Typed ShotGrid entities.

mod link;
mod notes;
mod people;
mod production;
mod project;
mod timelog;

pub use link::{SgFileLink, SgGenericEntity};
pub use notes::{SgAttachment, SgNote, SgReply};
pub use people::{SgBooking, SgHumanUser};
pub use production::{SgAsset, SgPlaylist, SgShot, SgTask, SgVersion};
pub use project::{SgPipelineStep, SgProject};
pub use timelog::SgTimeLog;
