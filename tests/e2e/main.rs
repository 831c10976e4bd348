// Integration tests for the narration pipeline.
//
// The speech backend is a scripted fake: each test declares the audio and
// timing events (plus delays or failures) per paragraph, which makes
// completion-order and failure scenarios deterministic. Storage runs
// against a unique temp directory per test, or an in-memory recorder when
// a test needs to inspect the written bytes.

mod test_narration;
