#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use picturelab_image as image;

#[doc(inline)]
pub use picturelab_imgproc as imgproc;

#[doc(inline)]
pub use picturelab_io as io;
