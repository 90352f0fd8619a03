/// The fixed-function switches a demo usually flips once at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderState {
    /// Enables depth testing with `LESS` comparison.
    pub depth_test: bool,
    /// Enables `SRC_ALPHA, ONE_MINUS_SRC_ALPHA` blending.
    pub blend: bool,
    /// Culls back faces with counter-clockwise front faces.
    pub cull_face: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            depth_test: false,
            blend: false,
            cull_face: false,
        }
    }
}

impl RenderState {
    /// Depth tested, opaque geometry. The usual setup of 3D demos.
    pub fn opaque_3d() -> Self {
        RenderState {
            depth_test: true,
            ..Default::default()
        }
    }

    /// Alpha blended, depth-less drawing. The usual setup of sprite demos.
    pub fn blended_2d() -> Self {
        RenderState {
            blend: true,
            ..Default::default()
        }
    }
}
