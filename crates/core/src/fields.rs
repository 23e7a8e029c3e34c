//! Default field selections per entity.
//!
//! These are the fields the typed helpers request when the caller does not
//! pass a custom list. The models are set up with these fields in mind.

pub const HUMANUSER_FIELDS: &[&str] = &[
    "login",
    "name",
    "firstname",
    "lastname",
    "email",
    "file_access",
    "image",
    "groups",
    "bookings",
    "department",
    "projects",
    "contracts",
    "language",
    "sg_status_list",
];

pub const PROJECT_FIELDS: &[&str] = &[
    "name",
    "is_template",
    "is_demo",
    "archived",
    "code",
    "sg_description",
    "sg_status",
    "sg_type",
    "start_date",
    "end_date",
    "updated_at",
    "image",
    "image_upload",
    "filmstrip_image",
    "duration",
    "users",
];

pub const TASK_FIELDS: &[&str] = &[
    "name",
    "short_name",
    "content",
    "duration",
    "milestone",
    "est_in_mins",
    "time_logs_sum",
    "time_percent_of_est",
    "time_vs_est",
    "implicit",
    "image",
    "filmstrip_image",
    "start_date",
    "due_date",
    "workload",
    "task_reviewers",
    "task_assignees",
    "entity",
    "project",
    "sg_versions",
    "step",
    "notes",
    "open_notes",
    "sg_status_list",
];

pub const ASSET_FIELDS: &[&str] = &[
    "code",
    "tasks",
    "notes",
    "open_notes",
    "project",
    "image",
    "filmstrip_image",
    "sg_asset_type",
    "sg_status_list",
    "sg_published_files",
    "sg_versions",
];

pub const SHOT_FIELDS: &[&str] = &[
    "code",
    "description",
    "image",
    "filmstrip_image",
    "project",
    "notes",
    "open_notes",
    "assets",
    "tasks",
    "parent_shots",
    "shots",
    "head_in",
    "head_duration",
    "head_out",
    "tail_in",
    "tail_out",
    "sg_head_in",
    "sg_head_out",
    "sg_cut_in",
    "sg_cut_out",
    "sg_cut_duration",
    "sg_working_duration",
    "sg_status_list",
    "sg_shot_type",
    "sg_published_files",
    "sg_versions",
];

pub const VERSION_FIELDS: &[&str] = &[
    "code",
    "description",
    "flagged",
    "image",
    "filmstrip_image",
    "entity",
    "project",
    "user",
    "tasks",
    "playlists",
    "notes",
    "open_notes",
    "otio_playable",
    "cuts",
    "uploaded_movie_duration",
    "sg_task",
    "sg_uploaded_movie",
    "sg_uploaded_movie_mp4",
    "sg_uploaded_movie_webm",
    "sg_uploaded_movie_transcoding_status",
    "sg_uploaded_movie_frame_rate",
    "sg_path_to_frames",
    "sg_path_to_movie",
    "sg_status_list",
    "sg_version_type",
];

pub const PLAYLIST_FIELDS: &[&str] = &[
    "code",
    "description",
    "locked",
    "locked_by",
    "project",
    "image",
    "filmstrip_image",
    "sg_date_and_time",
    "notes",
    "open_notes",
    "versions",
];

pub const ATTACHMENT_FIELDS: &[&str] = &[
    "this_file",
    "created_by",
    "display_name",
    "description",
    "image",
    "filename",
    "file_extension",
    "file_size",
    "filmstrip_image",
    "processing_status",
    "original_fname",
    "open_notes_count",
    "sg_status_list",
];

pub const NOTE_FIELDS: &[&str] = &[
    "subject",
    "content",
    "project",
    "user",
    "addressings_cc",
    "addressings_to",
    "note_links",
    "attachments",
    "sg_status_list",
];

pub const REPLY_FIELDS: &[&str] = &["content", "user", "entity", "publish_status"];

pub const BOOKING_FIELDS: &[&str] = &[
    "user",
    "start_date",
    "end_date",
    "note",
    "vacation",
    "project",
    "percent_allocation",
    "sg_status_list",
];

pub const TIMELOG_FIELDS: &[&str] = &[
    "date",
    "description",
    "duration",
    "entity",
    "project",
    "user",
];

/// Owned copy of a field list, as the request payloads expect.
pub fn to_owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}
