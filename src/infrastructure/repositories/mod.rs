pub mod audio_store;
pub mod fs_audio_store;
pub mod polly_speech_synthesizer;
pub mod speech_synthesizer;

pub use audio_store::AudioStore;
pub use fs_audio_store::FsAudioStore;
pub use polly_speech_synthesizer::PollySpeechSynthesizer;
pub use speech_synthesizer::{SpeechEvent, SpeechSynthesizer, TICKS_PER_SECOND};
