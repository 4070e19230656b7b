//! Windows paths: `\` is canonical and `/` is accepted as well
//!
//! Drive letters get no special treatment, so `combine("C:\\a", "D:b")`
//! yields `C:\a\D:b`.
//!
//! # Examples
//! ```
//! use path_algebra::windows;
//!
//! assert_eq!(windows::combine("C:\\foo", "bar"), "C:\\foo\\bar");
//! assert_eq!(windows::take_file_name("C:/foo\\bar.txt"), "bar.txt");
//! ```

specialize!(Platform::Windows);
