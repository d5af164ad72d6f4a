// Purpose: turn scheduled tone requests into mixed audio blocks
// This layer sits between the playback planner and the audio backends

pub mod message;
pub mod mixer;
pub mod voice;
