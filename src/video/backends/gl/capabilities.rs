use gl::types::*;
use std::cmp;
use std::ffi;

use crate::errors::*;

/// Describes the OpenGL context profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Profile {
    /// The context uses only future-compatible functions and definitions.
    Core,
    /// The context includes all immediate mode functions and definitions.
    Compatibility,
}

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g.
    /// `"4.6.0 NVIDIA 535.54"` or `"OpenGL ES 3.2 Mesa 23.0"`.
    pub fn parse_str(desc: &str) -> Result<Version> {
        let malformed = || Error::Backend(format!("Version string {:?} is malformed.", desc));

        let (es, rest) = if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1" and friends.
            let rest = desc.splitn(2, ' ').nth(1).ok_or_else(malformed)?;
            (true, rest)
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let number = rest.split_whitespace().next().ok_or_else(malformed)?;
        let mut iter = number.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        Version::parse_str(&parse_str(gl::VERSION)?)
    }
}

/// Represents the capabilities of the context.
///
/// Contrary to the state, these values never change.
#[derive(Debug)]
pub struct Capabilities {
    /// Returns a version or release number. Vendor-specific information may follow the version
    /// number.
    pub version: Version,

    /// The company responsible for this GL implementation.
    pub vendor: String,

    /// The name of the renderer. This name is typically specific to a particular
    /// configuration of a hardware platform.
    pub renderer: String,

    /// The version of the shading language, as reported by the driver.
    pub shading_language: String,

    /// The OpenGL context profile if available.
    ///
    /// The context profile is available from OpenGL 3.2 onwards. `None` if not supported.
    pub profile: Option<Profile>,

    /// Maximum number of textures that can be bound to a program.
    ///
    /// `glActiveTexture` must be between `GL_TEXTURE0` and `GL_TEXTURE0` + this value - 1.
    pub max_combined_texture_image_units: u32,
}

impl Capabilities {
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;

        Ok(Capabilities {
            version,
            vendor: parse_str(gl::VENDOR)?,
            renderer: parse_str(gl::RENDERER)?,
            shading_language: parse_str(gl::SHADING_LANGUAGE_VERSION)?,
            profile: Capabilities::parse_profile(version),
            max_combined_texture_image_units: Capabilities::parse_texture_image_units(),
        })
    }

    /// Every demo targets a 3.3 core context, or its ES 3.0 counterpart.
    pub fn check(&self) -> Result<()> {
        if self.version >= Version::GL(3, 3) || self.version >= Version::ES(3, 0) {
            Ok(())
        } else {
            Err(Error::Requirement(format!(
                "{:?}, at least GL 3.3 or ES 3.0 is required",
                self.version
            )))
        }
    }

    pub fn has_geometry_shader(&self) -> bool {
        self.version >= Version::GL(3, 2) || self.version >= Version::ES(3, 2)
    }

    #[inline]
    unsafe fn parse_profile(version: Version) -> Option<Profile> {
        if version >= Version::GL(3, 2) {
            let mut val = 0;
            gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut val);
            let val = val as GLenum;
            if (val & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT) != 0 {
                Some(Profile::Compatibility)
            } else if (val & gl::CONTEXT_CORE_PROFILE_BIT) != 0 {
                Some(Profile::Core)
            } else {
                None
            }
        } else {
            None
        }
    }

    #[inline]
    unsafe fn parse_texture_image_units() -> u32 {
        let mut val = 16;
        gl::GetIntegerv(gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS, &mut val);
        val as u32
    }
}

#[inline]
unsafe fn parse_str(id: GLenum) -> Result<String> {
    let s = gl::GetString(id);
    if s.is_null() {
        return Err(Error::Backend(format!("String of {:#x} is null.", id)));
    }

    let bytes = ffi::CStr::from_ptr(s as *const _).to_bytes().to_vec();
    String::from_utf8(bytes).map_err(|_| Error::Backend(format!("String of {:#x} is malformed.", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_versions() {
        assert_eq!(
            Version::parse_str("4.6.0 NVIDIA 535.54.03").unwrap(),
            Version::GL(4, 6)
        );
        assert_eq!(
            Version::parse_str("OpenGL ES 3.2 Mesa 23.0.4").unwrap(),
            Version::ES(3, 2)
        );
        assert_eq!(
            Version::parse_str("OpenGL ES-CM 1.1").unwrap(),
            Version::ES(1, 1)
        );
        assert!(Version::parse_str("").is_err());
        assert!(Version::parse_str("banana").is_err());
    }

    #[test]
    fn compare_versions() {
        assert!(Version::GL(3, 3) >= Version::GL(3, 2));
        assert!(Version::GL(4, 0) > Version::GL(3, 3));
        assert!(!(Version::GL(3, 3) >= Version::ES(3, 0)));
        assert!(!(Version::ES(3, 0) >= Version::GL(3, 3)));
    }
}
