mod transcription_engine_factory_test;
mod wav_transcoder_test;
