//! Director - owns the registered scenes and drives the current one

use log::info;

use super::{Lang, Scene, SceneContext, SceneId, SceneStatus, Storage};
use crate::assets::Assets;
use crate::backend::{Backend, Canvas};
use crate::error::GameError;
use crate::input::Input;

pub struct Director<B: Backend> {
    scenes: Vec<Box<dyn Scene<B>>>,
    /// Index into `scenes`, None until the first registration
    current: Option<usize>,
    /// Free-form game state, passed to scenes untouched
    pub state: u32,
    pub lang: Lang,
    pub storage: Storage,
}

impl<B: Backend> Director<B> {
    pub fn new(state: u32, lang: Lang) -> Self {
        Self {
            scenes: Vec::new(),
            current: None,
            state,
            lang,
            storage: Storage::default(),
        }
    }

    fn context<'a>(&self, assets: &'a Assets<B>) -> SceneContext<'a, B> {
        SceneContext {
            assets,
            lang: self.lang,
            state: self.state,
        }
    }

    /// Register a scene and run its `init`
    ///
    /// The first scene registered becomes current and is started.
    pub fn add_scene(&mut self, mut scene: Box<dyn Scene<B>>, assets: &Assets<B>) -> Result<(), GameError> {
        let id = scene.id();
        if self.scenes.iter().any(|s| s.id() == id) {
            return Err(GameError::DuplicateScene(id));
        }

        let ctx = self.context(assets);
        scene.init(&ctx);
        self.scenes.push(scene);
        info!("Registered scene {:?}", id);

        if self.current.is_none() {
            let index = self.scenes.len() - 1;
            self.current = Some(index);
            self.scenes[index].start(&ctx);
        }
        Ok(())
    }

    /// Update the current scene, then apply any switch it asked for
    pub fn update(&mut self, assets: &Assets<B>, input: &dyn Input) -> Result<(), GameError> {
        let Some(index) = self.current else {
            return Ok(());
        };
        let ctx = self.context(assets);

        let scene = &mut self.scenes[index];
        scene.update(&ctx, input)?;

        if let SceneStatus::Switch(target) = scene.status() {
            if target != scene.id() {
                self.switch_to(target, &ctx)?;
            }
        }
        Ok(())
    }

    fn switch_to(&mut self, target: SceneId, ctx: &SceneContext<'_, B>) -> Result<(), GameError> {
        let index = self
            .scenes
            .iter()
            .position(|s| s.id() == target)
            .ok_or(GameError::UnknownScene(target))?;

        info!("Switching to scene {:?}", target);
        self.current = Some(index);
        self.scenes[index].start(ctx);
        Ok(())
    }

    pub fn draw(&self, assets: &Assets<B>, canvas: &mut dyn Canvas<B>) {
        if let Some(index) = self.current {
            let ctx = self.context(assets);
            self.scenes[index].draw(&ctx, canvas);
        }
    }

    pub fn current_id(&self) -> Option<SceneId> {
        self.current.map(|i| self.scenes[i].id())
    }

    #[cfg(test)]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::assets::Directory;
    use crate::testing::{write_asset_tree, FakeBackend, FakeCanvas, ScriptedInput, TEST_FONT};

    /// Lifecycle calls seen by recording scenes, shared with the test
    type CallLog = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        id: SceneId,
        next: SceneStatus,
        log: CallLog,
    }

    impl Recorder {
        fn boxed(id: u32, next: SceneStatus, log: &CallLog) -> Box<dyn Scene<FakeBackend>> {
            Box::new(Recorder {
                id: SceneId(id),
                next,
                log: Rc::clone(log),
            })
        }

        fn record(&self, call: &str) {
            self.log.borrow_mut().push(format!("{}:{}", call, self.id.0));
        }
    }

    impl Scene<FakeBackend> for Recorder {
        fn id(&self) -> SceneId {
            self.id
        }

        fn init(&mut self, _ctx: &SceneContext<'_, FakeBackend>) {
            self.record("init");
        }

        fn start(&mut self, _ctx: &SceneContext<'_, FakeBackend>) {
            self.record("start");
        }

        fn update(&mut self, _ctx: &SceneContext<'_, FakeBackend>, _input: &dyn Input) -> Result<(), GameError> {
            self.record("update");
            Ok(())
        }

        fn draw(&self, _ctx: &SceneContext<'_, FakeBackend>, _canvas: &mut dyn Canvas<FakeBackend>) {
            self.record("draw");
        }

        fn status(&self) -> SceneStatus {
            self.next
        }
    }

    fn assets() -> Assets<FakeBackend> {
        let dir = write_asset_tree();
        Assets::load(&Directory::new(dir.path()), FakeBackend::default(), TEST_FONT).unwrap()
    }

    #[test]
    fn test_first_scene_becomes_current() {
        let assets = assets();
        let log = CallLog::default();
        let mut director = Director::new(0, Lang::En);

        director.add_scene(Recorder::boxed(1, SceneStatus::Running, &log), &assets).unwrap();
        director.add_scene(Recorder::boxed(2, SceneStatus::Running, &log), &assets).unwrap();

        assert_eq!(director.current_id(), Some(SceneId(1)));
        assert_eq!(director.scene_count(), 2);
        // Second scene is initialised but not started
        assert_eq!(*log.borrow(), vec!["init:1", "start:1", "init:2"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let assets = assets();
        let log = CallLog::default();
        let mut director = Director::new(0, Lang::En);

        director.add_scene(Recorder::boxed(1, SceneStatus::Running, &log), &assets).unwrap();
        let result = director.add_scene(Recorder::boxed(1, SceneStatus::Running, &log), &assets);

        assert!(matches!(result, Err(GameError::DuplicateScene(SceneId(1)))));
        assert_eq!(director.scene_count(), 1);
    }

    #[test]
    fn test_switch_starts_target() {
        let assets = assets();
        let log = CallLog::default();
        let mut director = Director::new(0, Lang::En);

        director.add_scene(Recorder::boxed(1, SceneStatus::Switch(SceneId(2)), &log), &assets).unwrap();
        director.add_scene(Recorder::boxed(2, SceneStatus::Running, &log), &assets).unwrap();
        log.borrow_mut().clear();

        director.update(&assets, &ScriptedInput::none()).unwrap();
        assert_eq!(director.current_id(), Some(SceneId(2)));

        let mut canvas = FakeCanvas::default();
        director.draw(&assets, &mut canvas);
        assert_eq!(*log.borrow(), vec!["update:1", "start:2", "draw:2"]);
    }

    #[test]
    fn test_switch_to_self_is_noop() {
        let assets = assets();
        let log = CallLog::default();
        let mut director = Director::new(0, Lang::En);

        director.add_scene(Recorder::boxed(1, SceneStatus::Switch(SceneId(1)), &log), &assets).unwrap();
        log.borrow_mut().clear();

        director.update(&assets, &ScriptedInput::none()).unwrap();
        assert_eq!(*log.borrow(), vec!["update:1"]);
    }

    #[test]
    fn test_switch_to_unknown_scene_errors() {
        let assets = assets();
        let log = CallLog::default();
        let mut director = Director::new(0, Lang::En);

        director.add_scene(Recorder::boxed(1, SceneStatus::Switch(SceneId(9)), &log), &assets).unwrap();
        let result = director.update(&assets, &ScriptedInput::none());

        assert!(matches!(result, Err(GameError::UnknownScene(SceneId(9)))));
        assert_eq!(director.current_id(), Some(SceneId(1)));
    }

    #[test]
    fn test_empty_director_does_nothing() {
        let assets = assets();
        let mut director: Director<FakeBackend> = Director::new(0, Lang::En);

        director.update(&assets, &ScriptedInput::none()).unwrap();
        let mut canvas = FakeCanvas::default();
        director.draw(&assets, &mut canvas);

        assert!(canvas.ops.is_empty());
        assert_eq!(director.current_id(), None);
    }
}
