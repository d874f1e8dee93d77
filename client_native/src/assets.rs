//! Optional image assets
//!
//! Tries to load the background and bird images at startup. Anything
//! that goes wrong - missing file, broken image - falls back to
//! flat-color rendering without stopping the game.

use std::path::Path;

use wgpu::*;

pub const BACKGROUND_PATH: &str = "assets/background.png";
pub const BIRD_PATH: &str = "assets/bird.png";

/// A decoded sprite uploaded to the GPU, ready to bind
pub struct SpriteTexture {
    pub bind_group: BindGroup,
}

/// Load an optional sprite; a failure only costs the image, never the game
pub fn load_sprite(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    path: &Path,
) -> Option<SpriteTexture> {
    match try_load(device, queue, layout, path) {
        Ok(sprite) => {
            tracing::info!(path = %path.display(), "loaded sprite");
            Some(sprite)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "sprite unavailable, using flat rendering");
            None
        }
    }
}

fn try_load(
    device: &Device,
    queue: &Queue,
    layout: &BindGroupLayout,
    path: &Path,
) -> anyhow::Result<SpriteTexture> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();

    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&TextureDescriptor {
        label: Some("Sprite Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: TextureDimension::D2,
        format: TextureFormat::Rgba8UnormSrgb,
        usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        },
        &img,
        TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&TextureViewDescriptor::default());
    let sampler = device.create_sampler(&SamplerDescriptor {
        label: Some("Sprite Sampler"),
        address_mode_u: AddressMode::ClampToEdge,
        address_mode_v: AddressMode::ClampToEdge,
        address_mode_w: AddressMode::ClampToEdge,
        mag_filter: FilterMode::Linear,
        min_filter: FilterMode::Linear,
        ..Default::default()
    });

    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some("Sprite Bind Group"),
        layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: BindingResource::TextureView(&view),
            },
            BindGroupEntry {
                binding: 1,
                resource: BindingResource::Sampler(&sampler),
            },
        ],
    });

    Ok(SpriteTexture { bind_group })
}
