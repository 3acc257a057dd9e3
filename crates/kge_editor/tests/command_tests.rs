//! Integration tests for kge_editor commands and history

use glam::{Quat, Vec3};
use kge_core::*;
use kge_editor::*;

const EPSILON: f32 = 1e-6;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scene with one of each entity kind and a small model for the
/// material editor commands.
struct Fixture {
    core: MemoryCore,
    model: EntityId,
    light: EntityId,
    camera: EntityId,
    stone: MaterialId,
    wood: MaterialId,
    wall: MeshId,
}

fn fixture() -> Fixture {
    init_logging();
    let mut core = MemoryCore::new();
    core.set_scene_name("Sponza").unwrap();

    let model = core.add_model("sponza.meshml").unwrap();
    let light = core.add_light(LightType::Spot, "Light0").unwrap();
    let camera = core.add_camera("Camera0").unwrap();

    let stone = core.add_material("Stone");
    let wood = core.add_material("Wood");
    let wall = core.add_mesh("Wall", stone).unwrap();
    core.set_num_frames(60);

    Fixture {
        core,
        model,
        light,
        camera,
        stone,
        wood,
        wall,
    }
}

/// Execute then revoke must leave every touched snapshot unchanged.
fn assert_inverse(core: &mut MemoryCore, cmd: impl Into<EditorCommand>) {
    let mut cmd = cmd.into();
    let before = capture(core);

    cmd.execute(core).unwrap_or_else(|e| panic!("'{}' failed: {}", cmd.name(), e));
    assert_ne!(capture(core), before, "'{}' changed nothing", cmd.name());
    cmd.revoke(core).unwrap();

    let after = capture(core);
    assert_eq!(after.entities.len(), before.entities.len());
    for (a, b) in after.entities.iter().zip(&before.entities) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.visible, b.visible);
        assert!(a.translation.abs_diff_eq(b.translation, EPSILON), "'{}'", cmd.name());
        assert!(a.rotation.abs_diff_eq(b.rotation, EPSILON), "'{}'", cmd.name());
        assert!(a.scale.abs_diff_eq(b.scale, EPSILON), "'{}'", cmd.name());
        assert_eq!(a.detail, b.detail, "'{}'", cmd.name());
    }
    assert_eq!(after, before, "'{}' did not revoke cleanly", cmd.name());
}

#[derive(Debug, PartialEq)]
struct Capture {
    scene: (String, String, Option<EntityId>, ControlMode, Vec<bool>),
    selection: Option<EntityId>,
    entities: Vec<EntitySnapshot>,
    materials: Vec<MaterialSnapshot>,
    meshes: (Option<MeshId>, Vec<MaterialId>),
    viewer: (u32, Vec<bool>),
}

fn capture(core: &MemoryCore) -> Capture {
    Capture {
        scene: (
            core.scene_name().unwrap(),
            core.skybox_name().unwrap(),
            core.active_camera().unwrap(),
            core.control_mode().unwrap(),
            DisplayOption::all()
                .iter()
                .map(|&o| core.display_option(o).unwrap())
                .collect(),
        ),
        selection: core.selected_entity().unwrap(),
        entities: core
            .entity_ids()
            .unwrap()
            .into_iter()
            .map(|id| core.entity_snapshot(id).unwrap())
            .collect(),
        materials: core
            .material_ids()
            .unwrap()
            .into_iter()
            .map(|id| core.material_snapshot(id).unwrap())
            .collect(),
        meshes: (
            core.selected_mesh().unwrap(),
            core.mesh_ids()
                .unwrap()
                .into_iter()
                .map(|m| core.mesh_material(m).unwrap())
                .collect(),
        ),
        viewer: (
            core.current_frame().unwrap().to_bits(),
            ViewerOption::all()
                .iter()
                .map(|&o| core.viewer_option(o).unwrap())
                .collect(),
        ),
    }
}

#[test]
fn test_undo_inverse_law_for_every_command() {
    let Fixture {
        mut core,
        model,
        light,
        camera,
        stone,
        wood,
        wall,
    } = fixture();

    let commands: Vec<EditorCommand> = vec![
        SceneCommand::set_name("Atrium").into(),
        SceneCommand::set_skybox("sky.dds").into(),
        SceneCommand::set_control_mode(ControlMode::Rotation).into(),
        SceneCommand::set_active_camera(Some(camera)).into(),
        SceneCommand::set_display_option(DisplayOption::Ssvo, false).into(),
        EntityCommand::add_model("lamp.meshml").into(),
        EntityCommand::add_light(LightType::Point, "Light1").into(),
        EntityCommand::add_camera("Camera1").into(),
        EntityCommand::remove(model).into(),
        EntityCommand::clear(None).into(),
        EntityCommand::clear(Some(EntityKind::Camera)).into(),
        EntityCommand::select(Some(light)).into(),
        EntityCommand::set_name(model, "Atrium").into(),
        EntityCommand::set_visible(model, false).into(),
        EntityCommand::set_translation(model, Vec3::new(1.0, 2.0, 3.0)).into(),
        EntityCommand::set_rotation(model, Quat::from_rotation_x(0.3)).into(),
        EntityCommand::set_scale(model, Vec3::splat(2.0)).into(),
        LightCommand::set_enabled(light, false).into(),
        LightCommand::set_attrib(light, LightAttrib::NO_DIFFUSE).into(),
        LightCommand::set_color(light, Vec3::new(0.2, 0.4, 0.8)).into(),
        LightCommand::set_falloff(light, Vec3::new(1.0, 0.5, 0.1)).into(),
        LightCommand::set_inner_angle(light, 0.2).into(),
        LightCommand::set_outer_angle(light, 0.7).into(),
        LightCommand::set_projective_texture(light, "lamp.dds").into(),
        CameraCommand::set_look_at(camera, Vec3::new(0.0, 1.0, 5.0)).into(),
        CameraCommand::set_up_vec(camera, Vec3::Z).into(),
        CameraCommand::set_fov(camera, 1.1).into(),
        CameraCommand::set_aspect(camera, 1.777).into(),
        CameraCommand::set_near_plane(camera, 0.5).into(),
        CameraCommand::set_far_plane(camera, 1000.0).into(),
        MaterialCommand::select_mesh(Some(wall)).into(),
        MaterialCommand::assign(wall, wood).into(),
        MaterialCommand::set_color(stone, MaterialColor::Emissive, Vec3::ONE).into(),
        MaterialCommand::set_scalar(stone, MaterialScalar::HeightScale, 0.3).into(),
        MaterialCommand::set_flag(stone, MaterialFlag::Transparent, true).into(),
        MaterialCommand::set_texture(stone, TextureSlot::Albedo, "stone.dds").into(),
        MaterialCommand::set_detail_mode(stone, DetailMode::FlatTessellation).into(),
        MaterialCommand::copy(stone).into(),
        ViewerCommand::set_current_frame(12.0).into(),
        ViewerCommand::set_option(ViewerOption::FpsCamera, true).into(),
    ];

    for cmd in commands {
        assert_inverse(&mut core, cmd);
    }
}

#[test]
fn test_cursor_invariant_and_flags() {
    let Fixture { mut core, model, .. } = fixture();
    let mut history = CommandHistory::new();

    let check = |history: &CommandHistory| {
        assert!(history.cursor() <= history.len());
        assert_eq!(history.can_undo(), history.cursor() > 0);
        assert_eq!(history.can_redo(), history.cursor() < history.len());
    };

    check(&history);
    for i in 0..4 {
        let x = i as f32;
        history
            .execute(EntityCommand::set_translation(model, Vec3::splat(x)), &mut core)
            .unwrap();
        check(&history);
    }
    while history.can_undo() {
        history.undo(&mut core).unwrap();
        check(&history);
    }
    history.redo(&mut core).unwrap();
    check(&history);
    history
        .execute(EntityCommand::set_visible(model, false), &mut core)
        .unwrap();
    check(&history);
    history.clear();
    check(&history);
}

#[test]
fn test_new_edit_discards_redo_tail() {
    let Fixture { mut core, model, .. } = fixture();
    let mut history = CommandHistory::new();

    history.execute(EntityCommand::set_name(model, "c1"), &mut core).unwrap();
    history.execute(EntityCommand::set_name(model, "c2"), &mut core).unwrap();
    history.execute(EntityCommand::set_name(model, "c3"), &mut core).unwrap();
    history.undo(&mut core).unwrap();
    history.undo(&mut core).unwrap();
    assert_eq!(history.cursor(), 1);

    history.execute(EntityCommand::set_visible(model, false), &mut core).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.command_name(0), Some("Set entity name"));
    assert_eq!(history.command_name(1), Some("Set entity visible"));
    assert!(!history.can_redo());
    assert_eq!(core.entity_name(model).unwrap(), "c1");
}

#[test]
fn test_redo_replays_exactly() {
    let Fixture { mut core, light, .. } = fixture();
    let mut history = CommandHistory::new();

    history
        .execute(LightCommand::set_color(light, Vec3::new(0.9, 0.1, 0.1)), &mut core)
        .unwrap();
    let after_execute = capture(&core);

    history.undo(&mut core).unwrap();
    assert_ne!(capture(&core), after_execute);

    history.redo(&mut core).unwrap();
    assert_eq!(capture(&core), after_execute);
}

#[test]
fn test_rename_then_undo() {
    let mut core = MemoryCore::new();
    // Ids 1-4 are taken so the light gets id 5
    for i in 0..4 {
        core.add_camera(&format!("Camera{}", i)).unwrap();
    }
    let id = core.add_light(LightType::Point, "Light0").unwrap();
    assert_eq!(id, EntityId(5));

    let mut history = CommandHistory::new();
    history.execute(EntityCommand::set_name(id, "Lamp"), &mut core).unwrap();
    assert_eq!(core.entity_name(id).unwrap(), "Lamp");

    history.undo(&mut core).unwrap();
    assert_eq!(core.entity_name(id).unwrap(), "Light0");
    assert!(history.can_redo());

    history.redo(&mut core).unwrap();
    assert_eq!(core.entity_name(id).unwrap(), "Lamp");
}

#[test]
fn test_add_then_remove_then_undo_twice() {
    let Fixture { mut core, light, .. } = fixture();
    core.select_entity(Some(light)).unwrap();
    let mut history = CommandHistory::new();

    let created = history
        .execute(EntityCommand::add_model("foo.meshml"), &mut core)
        .unwrap();
    let n = created.and_then(Created::entity).expect("AddModel returns the new id");
    assert_eq!(core.selected_entity().unwrap(), Some(n));

    core.set_entity_translation(n, Vec3::new(4.0, 0.0, -2.0)).unwrap();
    history.execute(EntityCommand::remove(n), &mut core).unwrap();
    assert!(!core.contains_entity(n));
    assert_eq!(core.selected_entity().unwrap(), None);

    history.undo(&mut core).unwrap();
    assert!(core.contains_entity(n));
    assert!(core
        .entity_translation(n)
        .unwrap()
        .abs_diff_eq(Vec3::new(4.0, 0.0, -2.0), EPSILON));
    assert_eq!(core.entity_name(n).unwrap(), "foo");

    history.undo(&mut core).unwrap();
    assert!(!core.contains_entity(n));
    assert_eq!(core.selected_entity().unwrap(), Some(light));
}

#[test]
fn test_creation_redo_keeps_later_entries_valid() {
    let mut core = MemoryCore::new();
    let mut history = CommandHistory::new();

    let light = history
        .execute(EntityCommand::add_light(LightType::Spot, "Light0"), &mut core)
        .unwrap()
        .and_then(Created::entity)
        .unwrap();
    history
        .execute(LightCommand::set_inner_angle(light, 0.25), &mut core)
        .unwrap();

    history.undo(&mut core).unwrap();
    history.undo(&mut core).unwrap();
    assert!(!core.contains_entity(light));

    // Both redo steps target the original id
    history.redo(&mut core).unwrap();
    history.redo(&mut core).unwrap();
    assert_eq!(core.light_inner_angle(light).unwrap(), 0.25);
    assert_eq!(core.entity_ids().unwrap(), vec![light]);
}

#[test]
fn test_clear_discards_all_history() {
    let Fixture {
        mut core,
        model,
        light,
        ..
    } = fixture();
    let mut history = CommandHistory::new();

    history.execute(EntityCommand::set_name(model, "A"), &mut core).unwrap();
    history.execute(LightCommand::set_enabled(light, false), &mut core).unwrap();
    history.execute(SceneCommand::set_skybox("sky.dds"), &mut core).unwrap();

    history.clear();

    assert_eq!(history.len(), 0);
    assert_eq!(history.cursor(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_clear_entities_restores_everything() {
    let Fixture {
        mut core,
        model,
        light,
        camera,
        ..
    } = fixture();
    core.set_active_camera(Some(camera)).unwrap();
    core.select_entity(Some(model)).unwrap();
    core.set_light_color(light, Vec3::new(0.5, 0.5, 0.0)).unwrap();
    let before = capture(&core);

    let mut history = CommandHistory::new();
    history.execute(EntityCommand::clear(None), &mut core).unwrap();
    assert_eq!(core.num_entities(), 0);
    assert_eq!(core.active_camera().unwrap(), None);

    history.undo(&mut core).unwrap();
    assert_eq!(capture(&core), before);
}

#[test]
fn test_copy_material_undo_redo() {
    let Fixture {
        mut core,
        stone,
        wall,
        ..
    } = fixture();
    let mut history = CommandHistory::new();

    let copy = history
        .execute(MaterialCommand::copy(stone), &mut core)
        .unwrap()
        .and_then(Created::material)
        .unwrap();
    history.execute(MaterialCommand::assign(wall, copy), &mut core).unwrap();
    history
        .execute(
            MaterialCommand::set_color(copy, MaterialColor::Albedo, Vec3::new(1.0, 0.0, 0.0)),
            &mut core,
        )
        .unwrap();
    let edited = capture(&core);

    for _ in 0..3 {
        history.undo(&mut core).unwrap();
    }
    assert!(!core.contains_material(copy));
    assert_eq!(core.mesh_material(wall).unwrap(), stone);

    for _ in 0..3 {
        history.redo(&mut core).unwrap();
    }
    assert_eq!(capture(&core), edited);
}

#[test]
fn test_import_material_is_undoable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wood.toml");

    let Fixture { mut core, wood, .. } = fixture();
    core.set_material_scalar(wood, MaterialScalar::Glossiness, 0.1).unwrap();
    core.export_material(wood, &path).unwrap();

    let mut history = CommandHistory::new();
    let imported = history
        .execute(MaterialCommand::import(&path), &mut core)
        .unwrap()
        .and_then(Created::material)
        .unwrap();
    assert_eq!(
        core.material_scalar(imported, MaterialScalar::Glossiness).unwrap(),
        0.1
    );

    history.undo(&mut core).unwrap();
    assert!(!core.contains_material(imported));

    history.redo(&mut core).unwrap();
    assert_eq!(core.material_name(imported).unwrap(), "Wood");
}

#[test]
fn test_import_missing_file_is_not_recorded() {
    let Fixture { mut core, .. } = fixture();
    let mut history = CommandHistory::new();

    let result = history.execute(MaterialCommand::import("missing/wood.toml"), &mut core);
    assert!(matches!(result, Err(CommandError::Core(CoreError::Io(_)))));
    assert!(history.is_empty());
}

#[test]
fn test_command_codes() {
    let Fixture { light, stone, .. } = fixture();

    let cmd: EditorCommand = LightCommand::set_outer_angle(light, 0.5).into();
    assert_eq!(cmd.code(), CommandCode::SetLightOuterAngle);
    assert_eq!(cmd.name(), "Set light outer angle");

    let cmd: EditorCommand = MaterialCommand::set_texture(stone, TextureSlot::Normal, "n.dds").into();
    assert_eq!(cmd.code(), CommandCode::SetTexture);
    assert_eq!(cmd.name(), "Set texture");
}
