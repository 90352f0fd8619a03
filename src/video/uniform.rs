use crate::math::prelude::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// The location of an active uniform inside a linked program.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UniformLocation(i32);

impl UniformLocation {
    #[inline]
    pub fn new(raw: i32) -> Self {
        UniformLocation(raw)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }
}

/// Uniform variable type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniformVariableType {
    I32,
    F32,
    Vector2f,
    Vector3f,
    Vector4f,
    Matrix2f,
    Matrix3f,
    Matrix4f,
}

/// Uniform variable for program object. Matrices are stored column by column,
/// which is what OpenGL expects when `transpose` is false.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformVariable {
    I32(i32),
    F32(f32),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Matrix2f([[f32; 2]; 2]),
    Matrix3f([[f32; 3]; 3]),
    Matrix4f([[f32; 4]; 4]),
}

impl UniformVariable {
    pub fn variable_type(&self) -> UniformVariableType {
        match *self {
            UniformVariable::I32(_) => UniformVariableType::I32,
            UniformVariable::F32(_) => UniformVariableType::F32,
            UniformVariable::Vector2f(_) => UniformVariableType::Vector2f,
            UniformVariable::Vector3f(_) => UniformVariableType::Vector3f,
            UniformVariable::Vector4f(_) => UniformVariableType::Vector4f,
            UniformVariable::Matrix2f(_) => UniformVariableType::Matrix2f,
            UniformVariable::Matrix3f(_) => UniformVariableType::Matrix3f,
            UniformVariable::Matrix4f(_) => UniformVariableType::Matrix4f,
        }
    }
}

// Booleans travel as integers, GLSL has no dedicated upload call for them.
impl From<bool> for UniformVariable {
    fn from(v: bool) -> Self {
        UniformVariable::I32(v as i32)
    }
}

impl From<i32> for UniformVariable {
    fn from(v: i32) -> Self {
        UniformVariable::I32(v)
    }
}

impl From<f32> for UniformVariable {
    fn from(v: f32) -> Self {
        UniformVariable::F32(v)
    }
}

impl From<Vector2<f32>> for UniformVariable {
    fn from(v: Vector2<f32>) -> Self {
        UniformVariable::Vector2f(v.into())
    }
}

impl From<[f32; 2]> for UniformVariable {
    fn from(v: [f32; 2]) -> Self {
        UniformVariable::Vector2f(v)
    }
}

impl From<Vector3<f32>> for UniformVariable {
    fn from(v: Vector3<f32>) -> Self {
        UniformVariable::Vector3f(v.into())
    }
}

impl From<[f32; 3]> for UniformVariable {
    fn from(v: [f32; 3]) -> Self {
        UniformVariable::Vector3f(v)
    }
}

impl From<Vector4<f32>> for UniformVariable {
    fn from(v: Vector4<f32>) -> Self {
        UniformVariable::Vector4f(v.into())
    }
}

impl From<[f32; 4]> for UniformVariable {
    fn from(v: [f32; 4]) -> Self {
        UniformVariable::Vector4f(v)
    }
}

impl From<[[f32; 2]; 2]> for UniformVariable {
    fn from(v: [[f32; 2]; 2]) -> Self {
        UniformVariable::Matrix2f(v)
    }
}

impl From<Matrix3<f32>> for UniformVariable {
    fn from(v: Matrix3<f32>) -> Self {
        UniformVariable::Matrix3f(v.into())
    }
}

impl From<[[f32; 3]; 3]> for UniformVariable {
    fn from(v: [[f32; 3]; 3]) -> Self {
        UniformVariable::Matrix3f(v)
    }
}

impl From<Matrix4<f32>> for UniformVariable {
    fn from(v: Matrix4<f32>) -> Self {
        UniformVariable::Matrix4f(v.into())
    }
}

impl From<[[f32; 4]; 4]> for UniformVariable {
    fn from(v: [[f32; 4]; 4]) -> Self {
        UniformVariable::Matrix4f(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::prelude::*;

    #[test]
    fn matrices_are_column_major() {
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        match UniformVariable::from(m) {
            UniformVariable::Matrix4f(v) => assert_eq!(v[3], [1.0, 2.0, 3.0, 1.0]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bool_is_uploaded_as_int() {
        assert_eq!(UniformVariable::from(true), UniformVariable::I32(1));
        assert_eq!(UniformVariable::from(false), UniformVariable::I32(0));
        assert_eq!(
            UniformVariable::from(0.5f32).variable_type(),
            UniformVariableType::F32
        );
    }
}
