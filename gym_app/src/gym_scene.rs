//! Home gym scene definition
//!
//! The fixed resource manifest and draw list: sixteen tagged textures, the
//! lighting materials, two cool-white lights, and the ordered object list.

use scene_engine::prelude::*;
use std::path::Path;

/// Intensity shared by both scene lights
const COOL_WHITE_INTENSITY: f32 = 0.8;

/// Color temperature shared by both scene lights (blue-white)
fn cool_white() -> Vec3 {
    Vec3::new(0.7, 0.75, 0.85)
}

/// Every texture the scene maps onto objects, in slot order
const TEXTURES: [&str; 16] = [
    "floor",
    "kickstand",
    "kickbag",
    "dumbell_steel",
    "dumbell_orange",
    "dumbell_pink",
    "dumbell_grey",
    "wall",
    "window",
    "window_wall",
    "tv",
    "dumbell_steel_white",
    "door",
    "double_doors",
    "weight_mats",
    "wall_mat",
];

/// Build the complete scene description
pub fn build(assets_dir: &Path, uv_scale: (f32, f32)) -> SceneDescription {
    let mut scene = SceneDescription::new().with_uv_scale(uv_scale.0, uv_scale.1);

    for tag in TEXTURES {
        scene = scene.with_texture(assets_dir.join(format!("{tag}.jpg")), tag);
    }

    scene = define_materials(scene);
    scene = place_lights(scene);
    place_objects(scene)
}

fn define_materials(scene: SceneDescription) -> SceneDescription {
    scene
        .with_material(
            Material::new("redKick")
                .with_ambient(Vec3::new(0.2, 0.2, 0.1), 0.4)
                .with_diffuse(Vec3::new(0.3, 0.3, 0.2))
                .with_specular(Vec3::new(0.6, 0.5, 0.4))
                .with_shininess(22.0),
        )
        .with_material(
            Material::new("KickStand")
                .with_ambient(Vec3::new(0.2, 0.2, 0.1), 0.4)
                .with_diffuse(Vec3::new(0.3, 0.3, 0.2))
                .with_specular(Vec3::new(0.6, 0.5, 0.4))
                .with_shininess(22.0),
        )
        .with_material(
            Material::new("darkMetallicDumbbell")
                .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.2)
                .with_diffuse(Vec3::new(0.1, 0.1, 0.1))
                .with_specular(Vec3::new(0.5, 0.5, 0.5))
                .with_shininess(32.0),
        )
        .with_material(
            Material::new("blackTVScreen")
                .with_ambient(Vec3::new(0.0, 0.0, 0.0), 0.0)
                .with_diffuse(Vec3::new(0.0, 0.0, 0.0))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        )
        .with_material(
            Material::new("glassMirror")
                .with_ambient(Vec3::new(0.0, 0.0, 0.0), 0.0)
                .with_diffuse(Vec3::new(0.0, 0.0, 0.0))
                .with_specular(Vec3::new(1.0, 1.0, 1.0))
                .with_shininess(100.0),
        )
        .with_material(
            Material::new("whiteWall")
                .with_ambient(Vec3::new(0.8, 0.8, 0.8), 0.2)
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        )
        .with_material(
            Material::new("whiteHardwoodFloor")
                .with_ambient(Vec3::new(0.4, 0.4, 0.4), 0.3)
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.3, 0.3, 0.3))
                .with_shininess(25.0),
        )
        .with_material(
            Material::new("rubberDumbbell")
                .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.2)
                .with_diffuse(Vec3::new(0.2, 0.2, 0.2))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        )
        .with_material(
            Material::new("floorMat")
                .with_ambient(Vec3::new(0.1, 0.1, 0.1), 0.2)
                .with_diffuse(Vec3::new(0.3, 0.3, 0.3))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        )
        .with_material(
            Material::new("whiteDoor")
                .with_ambient(Vec3::new(0.2, 0.2, 0.2), 0.3)
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.2, 0.2, 0.2))
                .with_shininess(10.0),
        )
        .with_material(
            Material::new("Window")
                .with_ambient(Vec3::new(0.2, 0.2, 0.2), 0.1)
                .with_diffuse(Vec3::new(0.8, 0.8, 0.8))
                .with_specular(Vec3::new(0.0, 0.0, 0.0))
                .with_shininess(0.0),
        )
}

fn place_lights(scene: SceneDescription) -> SceneDescription {
    scene
        .with_light(
            LightSource::new(Vec3::new(-14.0, 14.0, 0.0))
                .with_color(cool_white())
                .with_focal_strength(18.0)
                .with_specular_intensity(COOL_WHITE_INTENSITY),
        )
        .with_light(
            LightSource::new(Vec3::new(14.0, 5.0, 14.0))
                .with_color(cool_white())
                .with_focal_strength(18.0)
                .with_specular_intensity(COOL_WHITE_INTENSITY),
        )
}

fn place_objects(scene: SceneDescription) -> SceneDescription {
    scene
        // Room shell
        .with_object(
            SceneObject::new(ShapeKind::Plane)
                .with_scale(Vec3::new(14.0, 1.0, 10.0))
                .with_position(Vec3::new(0.0, 15.0, 0.0))
                .with_color(0.0, 1.0, 1.0, 1.0)
                .with_texture("wall")
                .with_material("whiteWall"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Plane)
                .with_scale(Vec3::new(14.0, 1.0, 10.0))
                .with_color(1.0, 1.0, 1.0, 1.0)
                .with_texture("floor")
                .with_material("whiteHardwoodFloor"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Plane)
                .with_scale(Vec3::new(8.0, 0.0, 14.0))
                .with_rotation_degrees(90.0, 90.0, 0.0)
                .with_position(Vec3::new(0.0, 7.5, -10.0))
                .with_color(1.0, 1.0, 1.0, 1.0)
                .with_texture("wall")
                .with_material("whiteWall"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Plane)
                .with_scale(Vec3::new(7.0, 1.0, 4.4))
                .with_rotation_degrees(90.0, 0.0, 0.0)
                .with_position(Vec3::new(-1.0, 5.0, -9.8))
                .with_color(0.0, 1.0, 1.0, 1.0)
                .with_texture("window")
                .with_material("glassMirror"),
        )
        // Wall fixtures
        .with_object(
            SceneObject::new(ShapeKind::Box)
                .with_scale(Vec3::new(5.0, 3.3, 0.2))
                .with_rotation_degrees(0.0, 10.0, 0.0)
                .with_position(Vec3::new(-10.6, 8.5, -8.5))
                .with_color(0.2, 0.2, 0.2, 1.0)
                .with_texture("tv")
                .with_material("blackTVScreen"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Box)
                .with_scale(Vec3::new(2.5, 10.0, 0.2))
                .with_rotation_degrees(0.0, 90.0, 0.0)
                .with_position(Vec3::new(7.8, 6.0, 7.0))
                .with_color(0.2, 0.2, 0.2, 1.0)
                .with_texture("wall_mat")
                .with_material("floorMat"),
        )
        // Kick bag: base, collar, bag
        .with_object(
            SceneObject::new(ShapeKind::TaperedCylinder)
                .with_scale(Vec3::new(2.0, 2.0, 1.5))
                .with_position(Vec3::new(-11.0, 0.0, -7.0))
                .with_texture("kickstand")
                .with_material("KickStand"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Cone)
                .with_scale(Vec3::new(0.8, 2.0, 0.5))
                .with_position(Vec3::new(-11.0, 1.6, -7.0))
                .with_color(1.0, 0.0, 0.0, 1.0)
                .with_texture("kickstand")
                .with_material("KickStand"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Cylinder)
                .with_scale(Vec3::new(1.0, 5.0, 1.0))
                .with_position(Vec3::new(-11.0, 2.6, -7.0))
                .with_texture("kickbag")
                .with_material("redKick"),
        )
        // Stacked corner weights
        .with_object(
            SceneObject::new(ShapeKind::Torus)
                .with_rotation_degrees(90.0, 0.0, 0.0)
                .with_position(Vec3::new(11.0, 0.2, -6.0))
                .with_color(0.7, 0.7, 0.7, 1.0)
                .with_texture("dumbell_steel_white")
                .with_material("darkMetallicDumbbell"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Torus)
                .with_scale(Vec3::new(0.8, 0.8, 1.0))
                .with_rotation_degrees(90.0, 0.0, 0.0)
                .with_position(Vec3::new(11.0, 0.4, -6.0))
                .with_color(0.5, 0.5, 0.5, 1.0)
                .with_texture("dumbell_steel_white")
                .with_material("darkMetallicDumbbell"),
        )
        .with_object(
            SceneObject::new(ShapeKind::Torus)
                .with_scale(Vec3::new(0.6, 0.6, 1.0))
                .with_rotation_degrees(90.0, 0.0, 0.0)
                .with_position(Vec3::new(11.0, 0.6, -6.0))
                .with_color(0.3, 0.3, 0.3, 1.0)
                .with_texture("dumbell_steel_white")
                .with_material("darkMetallicDumbbell"),
        )
        // Kettlebell; the tag is not in the texture manifest, so this draw
        // binds the sentinel slot
        .with_object(
            SceneObject::new(ShapeKind::Sphere)
                .with_scale(Vec3::new(0.5, 0.5, 0.5))
                .with_position(Vec3::new(-11.0, 0.4, -0.7))
                .with_color(0.2, 0.2, 0.2, 1.0)
                .with_texture("kettlebell_blue"),
        )
}
