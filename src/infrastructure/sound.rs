// Fire-and-forget: implementations swallow their own failures (blocked
// autoplay stays silent) and must never block phase advance.
pub trait SoundSink: Send + Sync {
    fn play_completion_cue(&self);
}

#[derive(Debug, Default, Clone)]
pub struct NullSoundSink;

impl SoundSink for NullSoundSink {
    fn play_completion_cue(&self) {}
}
