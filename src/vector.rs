//! Three-component geometric vectors.

use crate::{Element, Error, Result};
use log::{Level, log};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

// Axis and normal arguments with a squared norm below this are degenerate.
const MIN_SQUARED_NORM: f64 = 1e-10;

const ATTRIBUTE_NAMES: [&str; 3] = ["x", "y", "z"];

/// An xyz vector.
///
/// Components are addressable by name or by index, both over the same
/// storage:
///
/// ```
/// use trivec::Vector;
/// let vector = Vector::new(1., 2., 3.);
/// assert_eq!(vector.x, vector[0]);
/// assert_eq!(vector.y, vector[1]);
/// assert_eq!(vector.z, vector[2]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    /// X
    pub x: f64,
    /// Y
    pub y: f64,
    /// Z
    pub z: f64,
}

impl Vector {
    /// Creates a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let vector = Vector::new(1., 2., 3.);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x, y, z }
    }

    /// Returns the dot product of this vector and another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let vector = Vector::new(1., 2., 3.);
    /// assert_eq!(20., vector.dot(Vector::new(2., 3., 4.)));
    /// ```
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of this vector and another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let x = Vector::new(1., 0., 0.);
    /// let y = Vector::new(0., 1., 0.);
    /// assert_eq!(Vector::new(0., 0., 1.), x.cross(y));
    /// ```
    pub fn cross(&self, other: Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared norm of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// assert_eq!(14., Vector::new(1., 2., 3.).squared_norm());
    /// ```
    pub fn squared_norm(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the norm of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// assert_eq!(5., Vector::new(3., 4., 0.).norm());
    /// ```
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Projects this vector onto the axis of direction `direction` that
    /// passes through the origin.
    ///
    /// `direction` does not need to be normalized, but must be non-null. A
    /// near-null direction logs a warning in debug builds and the division
    /// proceeds anyway, so the result can be huge or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let mut vector = Vector::new(1., 2., 3.);
    /// vector.project_on_axis(Vector::new(1., 0., 0.));
    /// assert_eq!(Vector::new(1., 0., 0.), vector);
    /// ```
    pub fn project_on_axis(&mut self, direction: Vector) {
        if cfg!(debug_assertions) && direction.squared_norm() < MIN_SQUARED_NORM {
            log!(
                Level::Warn,
                "project_on_axis: axis direction is not normalized (norm={})",
                direction.norm()
            );
        }
        *self = (self.dot(direction) / direction.squared_norm()) * direction;
    }

    /// Projects this vector onto the plane through the origin whose normal
    /// is `normal`.
    ///
    /// `normal` does not need to be normalized, but must be non-null. A
    /// near-null normal logs a warning in debug builds and the division
    /// proceeds anyway, so the result can be huge or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let mut vector = Vector::new(1., 1., 1.);
    /// vector.project_on_plane(Vector::new(0., 0., 1.));
    /// assert_eq!(Vector::new(1., 1., 0.), vector);
    /// ```
    pub fn project_on_plane(&mut self, normal: Vector) {
        if cfg!(debug_assertions) && normal.squared_norm() < MIN_SQUARED_NORM {
            log!(
                Level::Warn,
                "project_on_plane: plane normal is not normalized (norm={})",
                normal.norm()
            );
        }
        *self -= (self.dot(normal) / normal.squared_norm()) * normal;
    }

    /// Creates a vector from the `x`, `y`, and `z` attributes of an element.
    ///
    /// Each attribute that is missing or not a number independently falls
    /// back to 0.0. This never fails: a damaged element yields whatever
    /// components were readable.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::{Element, Vector};
    /// let mut element = Element::new("pos");
    /// element.set_attribute("x", "1.5");
    /// element.set_attribute("z", "3");
    /// assert_eq!(Vector::new(1.5, 0., 3.), Vector::from_element(&element));
    /// ```
    pub fn from_element(element: &Element) -> Vector {
        let mut vector = Vector::default();
        for (i, name) in ATTRIBUTE_NAMES.iter().enumerate() {
            vector[i] = element.f64_attribute(name, 0.);
        }
        vector
    }

    /// Returns a new element with the given tag name and this vector's
    /// components as `x`, `y`, and `z` attributes.
    ///
    /// The element is not attached to anything; the caller decides where it
    /// goes in the document tree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trivec::Vector;
    /// let element = Vector::new(1.5, -2.25, 0.).to_element("pos");
    /// assert_eq!("<pos x=\"1.5\" y=\"-2.25\" z=\"0\" />", element.to_string());
    /// ```
    pub fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        for (i, attribute) in ATTRIBUTE_NAMES.iter().enumerate() {
            element.set_attribute(*attribute, self[i].to_string());
        }
        element
    }

    /// Resets this vector from an element created by [`Vector::to_element`].
    ///
    /// Identical to constructing with [`Vector::from_element`] and assigning
    /// the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use trivec::{Element, Vector};
    /// let element = Vector::new(1., 2., 3.).to_element("pos");
    /// let mut vector = Vector::default();
    /// vector.set_from_element(&element);
    /// assert_eq!(Vector::new(1., 2., 3.), vector);
    /// ```
    pub fn set_from_element(&mut self, element: &Element) {
        *self = Vector::from_element(element);
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("vector index out of range: {index}"),
        }
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        *self = *self + other;
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Vector) {
        *self = *self - other;
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, scalar: f64) -> Vector {
        Vector::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

impl From<[f64; 3]> for Vector {
    fn from(components: [f64; 3]) -> Vector {
        Vector::new(components[0], components[1], components[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(vector: Vector) -> [f64; 3] {
        [vector.x, vector.y, vector.z]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector {
    type Err = Error;
    fn from_str(s: &str) -> Result<Vector> {
        let components: Vec<&str> = s.split_whitespace().collect();
        if components.len() != 3 {
            return Err(Error::ComponentCount(components.len()));
        }
        let mut vector = Vector::default();
        for (i, component) in components.iter().enumerate() {
            vector[i] = component
                .parse()
                .map_err(|err| Error::InvalidComponent((*component).to_string(), err))?;
        }
        Ok(vector)
    }
}
