//! Lectura en voz alta: manda el texto de la diapositiva a un backend de voz y
//! reproduce el audio.
//!
//! Cada petición lleva un ticket y la diapositiva de origen. Los resultados que
//! llegan después de parar o de cambiar de diapositiva se descartan.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::error::SpeechError;

/// Muestras por segundo del PCM que devuelve el backend HTTP
pub const PCM_SAMPLE_RATE: u32 = 24_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideKey {
    pub level_id: u32,
    pub slide_index: usize,
}

/// Muestras de 16 bits con signo, intercaladas si `channels > 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioClip {
    pub fn from_pcm16_le(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<Self, SpeechError> {
        if bytes.is_empty() {
            return Err(SpeechError::MalformedAudio("empty response".into()));
        }
        if bytes.len() % 2 != 0 {
            return Err(SpeechError::MalformedAudio(format!(
                "odd byte count {} for 16-bit PCM",
                bytes.len()
            )));
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self {
            samples,
            sample_rate,
            channels,
        })
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / (self.sample_rate as f32 * self.channels as f32)
    }
}

/// Backend que convierte texto en audio.
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError>;
}

/// Sin backend configurado: toda petición falla con un aviso.
#[derive(Debug, Default)]
pub struct Unavailable;

impl SpeechSynthesizer for Unavailable {
    fn synthesize(&self, _text: &str) -> Result<AudioClip, SpeechError> {
        Err(SpeechError::NotConfigured)
    }
}

/// Endpoint `/audio/speech` compatible con OpenAI, pidiendo PCM crudo.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HttpSynthesizer {
    endpoint: String,
    api_key: String,
    model: String,
    voice: String,
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpSynthesizer {
    pub fn new(config: &crate::config::SpeechConfig) -> Result<Self, SpeechError> {
        let api_key = config.api_key.clone().ok_or(SpeechError::NotConfigured)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| SpeechError::Service(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            voice: config.voice.clone(),
            client,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SpeechSynthesizer for HttpSynthesizer {
    fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::MalformedAudio("nothing to read".into()));
        }
        let url = format!("{}/audio/speech", self.endpoint);
        let body = serde_json::json!({
            "model": self.model,
            "input": text,
            "voice": self.voice,
            "response_format": "pcm",
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| SpeechError::Service(format!("Error conectando con {url}: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(SpeechError::Service(format!(
                "HTTP {status} from {url}{}",
                if body.trim().is_empty() {
                    String::new()
                } else {
                    format!(": {}", body.trim())
                }
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| SpeechError::Service(e.to_string()))?;
        AudioClip::from_pcm16_le(&bytes, PCM_SAMPLE_RATE, 1)
    }
}

pub trait AudioOutput {
    fn play(&mut self, clip: &AudioClip) -> Result<(), SpeechError>;
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Sin dispositivo de audio: reproducir falla y el usuario recibe el aviso.
#[derive(Debug, Default)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn play(&mut self, clip: &AudioClip) -> Result<(), SpeechError> {
        log::debug!("No audio output for {:.1}s clip", clip.duration_secs());
        Err(SpeechError::Playback("no audio output device".into()))
    }

    fn stop(&mut self) {}

    fn is_playing(&self) -> bool {
        false
    }
}

#[cfg(all(feature = "playback", not(target_arch = "wasm32")))]
pub struct RodioOutput {
    _stream: rodio::OutputStream,
    handle: rodio::OutputStreamHandle,
    sink: Option<rodio::Sink>,
}

#[cfg(all(feature = "playback", not(target_arch = "wasm32")))]
impl RodioOutput {
    pub fn try_default() -> Result<Self, SpeechError> {
        let (stream, handle) =
            rodio::OutputStream::try_default().map_err(|e| SpeechError::Playback(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

#[cfg(all(feature = "playback", not(target_arch = "wasm32")))]
impl AudioOutput for RodioOutput {
    fn play(&mut self, clip: &AudioClip) -> Result<(), SpeechError> {
        self.stop();
        let sink =
            rodio::Sink::try_new(&self.handle).map_err(|e| SpeechError::Playback(e.to_string()))?;
        sink.append(rodio::buffer::SamplesBuffer::new(
            clip.channels,
            clip.sample_rate,
            clip.samples.clone(),
        ));
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_playing(&self) -> bool {
        self.sink.as_ref().map(|s| !s.empty()).unwrap_or(false)
    }
}

/// Dónde se ejecuta la síntesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Hilo aparte en nativo, `spawn_local` en wasm32.
    Background,
    /// En el hilo que llama; el resultado lo aplica igualmente `poll`.
    Inline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading(SlideKey),
    Playing(SlideKey),
}

struct Completion {
    ticket: u64,
    slide: SlideKey,
    result: Result<AudioClip, SpeechError>,
}

pub struct ReadAloud {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    output: Box<dyn AudioOutput>,
    dispatch: Dispatch,
    state: PlaybackState,
    ticket: u64,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    notice: Option<String>,
}

impl ReadAloud {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        output: Box<dyn AudioOutput>,
        dispatch: Dispatch,
    ) -> Self {
        let (tx, rx) = channel();
        Self {
            synthesizer,
            output,
            dispatch,
            state: PlaybackState::Idle,
            ticket: 0,
            tx,
            rx,
            notice: None,
        }
    }

    /// Lectura sin backend: las peticiones fallan con un aviso.
    pub fn disabled() -> Self {
        Self::new(Arc::new(Unavailable), Box::new(NullOutput), Dispatch::Inline)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Si hay una petición para `slide` cargando o sonando.
    pub fn is_active_for(&self, slide: SlideKey) -> bool {
        matches!(self.state, PlaybackState::Loading(s) | PlaybackState::Playing(s) if s == slide)
    }

    pub fn request(&mut self, slide: SlideKey, text: String) {
        self.stop();
        let ticket = self.ticket;
        self.state = PlaybackState::Loading(slide);

        let synthesizer = Arc::clone(&self.synthesizer);
        let tx = self.tx.clone();
        let job = move || {
            let result = synthesizer.synthesize(&text);
            // El receptor solo desaparece si se destruyó el controlador
            let _ = tx.send(Completion {
                ticket,
                slide,
                result,
            });
        };

        match self.dispatch {
            Dispatch::Inline => job(),
            Dispatch::Background => spawn_background(job),
        }
    }

    /// Empieza a leer `slide`, o para si ya se está leyendo.
    pub fn toggle(&mut self, slide: SlideKey, text: String) {
        if self.is_active_for(slide) {
            self.stop();
        } else {
            self.request(slide, text);
        }
    }

    /// Para la reproducción e invalida cualquier petición pendiente.
    pub fn stop(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
        self.output.stop();
        self.state = PlaybackState::Idle;
    }

    /// Aplica las peticiones terminadas. Llamar una vez por frame.
    pub fn poll(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            let waiting_for = match self.state {
                PlaybackState::Loading(slide) => Some(slide),
                _ => None,
            };
            if done.ticket != self.ticket || waiting_for != Some(done.slide) {
                log::debug!("Discarding stale read-aloud result for {:?}", done.slide);
                continue;
            }
            match done.result {
                Ok(clip) => match self.output.play(&clip) {
                    Ok(()) => self.state = PlaybackState::Playing(done.slide),
                    Err(e) => self.fail(e),
                },
                Err(e) => self.fail(e),
            }
        }

        if matches!(self.state, PlaybackState::Playing(_)) && !self.output.is_playing() {
            self.state = PlaybackState::Idle;
        }
    }

    fn fail(&mut self, error: SpeechError) {
        log::warn!("Read-aloud failed: {error}");
        self.notice = Some(format!("Read-aloud unavailable: {error}"));
        self.state = PlaybackState::Idle;
    }

    /// El aviso de fallo pendiente; se entrega una sola vez.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_background(job: impl FnOnce() + Send + 'static) {
    std::thread::spawn(job);
}

#[cfg(target_arch = "wasm32")]
fn spawn_background(job: impl FnOnce() + Send + 'static) {
    wasm_bindgen_futures::spawn_local(async move { job() });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    struct Scripted {
        requests: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Scripted {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                fail: true,
            })
        }
    }

    impl SpeechSynthesizer for Scripted {
        fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError> {
            self.requests.lock().expect("lock").push(text.to_string());
            if self.fail {
                return Err(SpeechError::Service("HTTP 500".into()));
            }
            Ok(AudioClip {
                samples: vec![0; 24],
                sample_rate: PCM_SAMPLE_RATE,
                channels: 1,
            })
        }
    }

    #[derive(Default)]
    struct OutputLog {
        played: usize,
        stops: usize,
        playing: bool,
    }

    struct SharedOutput(Rc<RefCell<OutputLog>>);

    impl AudioOutput for SharedOutput {
        fn play(&mut self, _clip: &AudioClip) -> Result<(), SpeechError> {
            let mut log = self.0.borrow_mut();
            log.played += 1;
            log.playing = true;
            Ok(())
        }

        fn stop(&mut self) {
            let mut log = self.0.borrow_mut();
            log.stops += 1;
            log.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.0.borrow().playing
        }
    }

    fn key(level_id: u32, slide_index: usize) -> SlideKey {
        SlideKey {
            level_id,
            slide_index,
        }
    }

    fn controller(synth: Arc<Scripted>) -> (ReadAloud, Rc<RefCell<OutputLog>>) {
        let log = Rc::new(RefCell::new(OutputLog::default()));
        let ra = ReadAloud::new(synth, Box::new(SharedOutput(log.clone())), Dispatch::Inline);
        (ra, log)
    }

    #[test]
    fn successful_request_plays_until_output_finishes() {
        let synth = Scripted::ok();
        let (mut ra, log) = controller(synth.clone());

        ra.request(key(1, 0), "The Undefined Terms".into());
        assert_eq!(ra.state(), PlaybackState::Loading(key(1, 0)));

        ra.poll();
        assert_eq!(ra.state(), PlaybackState::Playing(key(1, 0)));
        assert_eq!(log.borrow().played, 1);

        log.borrow_mut().playing = false;
        ra.poll();
        assert_eq!(ra.state(), PlaybackState::Idle);
        assert_eq!(synth.requests.lock().expect("lock").len(), 1);
    }

    #[test]
    fn result_for_previous_slide_is_discarded() {
        let (mut ra, log) = controller(Scripted::ok());

        ra.request(key(1, 0), "slide one".into());
        ra.request(key(1, 1), "slide two".into());
        ra.poll();

        assert_eq!(log.borrow().played, 1);
        assert_eq!(ra.state(), PlaybackState::Playing(key(1, 1)));
    }

    #[test]
    fn stop_before_completion_never_plays() {
        let (mut ra, log) = controller(Scripted::ok());

        ra.request(key(2, 0), "angles".into());
        ra.stop();
        ra.poll();

        assert_eq!(log.borrow().played, 0);
        assert_eq!(ra.state(), PlaybackState::Idle);
    }

    #[test]
    fn toggle_stops_active_slide() {
        let (mut ra, log) = controller(Scripted::ok());
        ra.toggle(key(3, 0), "midpoints".into());
        ra.poll();
        assert!(ra.is_active_for(key(3, 0)));

        ra.toggle(key(3, 0), "midpoints".into());
        assert_eq!(ra.state(), PlaybackState::Idle);
        assert!(!log.borrow().playing);
    }

    #[test]
    fn failure_becomes_single_notice() {
        let (mut ra, log) = controller(Scripted::failing());

        ra.request(key(4, 0), "parallel".into());
        ra.poll();

        assert_eq!(ra.state(), PlaybackState::Idle);
        assert_eq!(log.borrow().played, 0);
        let notice = ra.take_notice().expect("notice");
        assert!(notice.contains("HTTP 500"));
        assert!(ra.take_notice().is_none());
    }

    #[test]
    fn disabled_controller_reports_not_configured() {
        let mut ra = ReadAloud::disabled();
        ra.request(key(1, 0), "text".into());
        ra.poll();
        assert!(ra.take_notice().expect("notice").contains("not configured"));
    }

    #[test]
    fn background_dispatch_delivers_through_poll() {
        let log = Rc::new(RefCell::new(OutputLog::default()));
        let mut ra = ReadAloud::new(
            Scripted::ok(),
            Box::new(SharedOutput(log.clone())),
            Dispatch::Background,
        );
        ra.request(key(5, 0), "midpoint formula".into());

        for _ in 0..500 {
            ra.poll();
            if ra.state() != PlaybackState::Loading(key(5, 0)) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert_eq!(ra.state(), PlaybackState::Playing(key(5, 0)));
    }

    #[test]
    fn missing_audio_device_is_reported_not_silent() {
        let mut ra = ReadAloud::new(Scripted::ok(), Box::new(NullOutput), Dispatch::Inline);

        ra.request(key(1, 1), "Why 'Undefined'?".into());
        ra.poll();

        assert_eq!(ra.state(), PlaybackState::Idle);
        let notice = ra.take_notice().expect("notice");
        assert!(notice.contains("no audio output device"));
        assert!(ra.take_notice().is_none());
    }

    #[test]
    fn pcm_decoding_checks_length() {
        let clip = AudioClip::from_pcm16_le(&[0x01, 0x00, 0xff, 0xff], 24_000, 1).expect("pcm");
        assert_eq!(clip.samples, vec![1, -1]);
        assert!(AudioClip::from_pcm16_le(&[0x01], 24_000, 1).is_err());
        assert!(AudioClip::from_pcm16_le(&[], 24_000, 1).is_err());
    }

    #[test]
    fn http_backend_requires_api_key() {
        let cfg = crate::config::SpeechConfig::default();
        assert!(matches!(
            HttpSynthesizer::new(&cfg),
            Err(SpeechError::NotConfigured)
        ));
    }
}
