// Static allow-list of output format identifiers.
//
// The table mirrors what the downstream image backend can reasonably be asked
// for; identifiers are always matched lowercase. It is never mutated at
// runtime: it backs `--format` validation, file-name reconciliation and the
// `--list-formats` help table.

use crate::report::ConversionReporter;

/// Format used when nothing else was requested, and the one the external
/// decoder always produces first.
pub const DEFAULT_FORMAT: &str = "tiff";

const PNG_DESC: &str = "Portable Network Graphics is a lossless format that supports transparency. APNG (Animated PNG) is an extension supporting simple animations.";
const JPEG_DESC: &str = "The most common image format, using lossy compression to reduce file size. Widely used for web photographs. Extensions: `.jpg`, `.jpeg`, `.jfif`, `.jpe`.";
const GIF_DESC: &str = "Graphics Interchange Format, limited to 256 colors. Supports animation, but images may not appear animated here.";
const TIFF_DESC: &str = "Tagged Image File Format, commonly used in professional photography and desktop publishing. Supports lossless compression, layers, and multiple pages.";
const BMP_DESC: &str = "Bitmap Image File is a standard image format on Windows. It stores color data for each pixel in the image without compression, leading to large file sizes.";
const WEBP_DESC: &str = "A modern image format that provides both lossy and lossless compression. Optimized for the web, offering smaller file sizes with high quality.";
const PDF_DESC: &str = "Portable Document Format, mainly used for documents but can include embedded images.";
const PSD_DESC: &str = "Adobe Photoshop Document format, used to store images with layers, channels, and various adjustments.";
const EPS_DESC: &str = "Encapsulated PostScript and PostScript formats are used for vector graphics and layouts. Popular in desktop publishing. Extensions: `.eps`, `.ps`.";
const ICO_DESC: &str = "Icon file format used in Windows for storing multiple sizes and color depths of icons for applications and shortcuts.";
const ICNS_DESC: &str = "Apple Icon Image format used on macOS for application icons. Supports multiple resolutions and color depths.";
const MPEG_DESC: &str = "A video format, but individual frames of MPEG videos can be processed. Extensions: `.mpg`, `.mpeg`.";
const MSP_DESC: &str = "Microsoft Paint bitmap image file, an old format used by early versions of MS Paint.";
const NETPBM_DESC: &str = "A family of simple uncompressed image formats (Portable Pixmap, Portable Graymap, Portable Bitmap) used for basic image storage. Extensions: `.pbm`, `.pgm`, `.ppm`, `.pnm`, `.pfm`.";
const BLP_DESC: &str = "Used primarily in Blizzard Entertainment games, such as World of Warcraft. It's a compressed format similar to JPEG, but optimized for fast decompression in games.";
const BUFR_DESC: &str = "Binary Universal Form for the Representation of meteorological data. Used in meteorology to store and exchange weather-related information.";
const CUR_DESC: &str = "Cursor file format, used to define the image of a mouse pointer on Windows.";
const PCX_DESC: &str = "One of the earliest image formats for PC Paintbrush software. It's a simple bitmap image format, while DCX is an extension supporting multiple pages.";
const DDS_DESC: &str = "DirectDraw Surface format, commonly used for storing textures and mipmaps in video games.";
const FITS_DESC: &str = "Flexible Image Transport System, mainly used in astronomy for storing scientific images with associated metadata. Extensions: `.fit`, `.fits`.";
const FLI_DESC: &str = "Animation formats developed by Autodesk. FLI and FLC files are used for storing simple animations in older software. Extensions: `.fli`, `.flc`.";
const FTEX_DESC: &str = "Format for storing texture data in video games, particularly on the PlayStation 2. Extensions: `.ftc`, `.ftu`.";
const GBR_DESC: &str = "GIMP Brush file used by the GNU Image Manipulation Program (GIMP) to store custom brush shapes.";
const GRIB_DESC: &str = "GRIdded Binary, a concise data format used in meteorology to store weather forecast data.";
const HDF_DESC: &str = "Hierarchical Data Format version 5, used for storing large amounts of scientific data. Extensions: `.h5`, `.hdf`.";
const JP2_DESC: &str = "An improved version of JPEG, offering better compression and quality, as well as support for lossless compression and alpha channels. Extensions: `.jp2`, `.j2k`, `.jpc`, `.jpf`, `.jpx`, `.j2c`.";
const IM_DESC: &str = "An internal raster format used by some image libraries to store images.";
const IIM_DESC: &str = "Used for storing metadata in images, typically in news photography to include information like captions and authorship.";
const MPO_DESC: &str = "Multi-Picture Object format, used for storing multiple images in a single file, often for 3D images from digital cameras.";
const PALM_DESC: &str = "Image format used by Palm OS devices, with limited color support and simple compression.";
const PCD_DESC: &str = "Kodak Photo CD format, used for storing high-resolution images scanned from film.";
const PXR_DESC: &str = "Used by Pixar for raster images, particularly in the RenderMan software.";
const QOI_DESC: &str = "Quite OK Image, a new image format designed to be simple, fast, and efficient, without sacrificing quality.";
const SGI_DESC: &str = "Silicon Graphics Image format, used primarily on Silicon Graphics workstations. Extensions: `.bw`, `.rgb`, `.rgba`, `.sgi`.";
const RAS_DESC: &str = "Sun Raster format, used on Sun Microsystems workstations.";
const TGA_DESC: &str = "Targa format, originally developed by Truevision, commonly used in video game graphics and simple image storage. Extensions: `.tga`, `.icb`, `.vda`, `.vst`.";
const WMF_DESC: &str = "Windows Metafile and Enhanced Metafile formats, used for storing vector and bitmap data on Windows systems. Extensions: `.wmf`, `.emf`.";
const XBM_DESC: &str = "X Bitmap format, used for storing monochrome icons and cursors in the X Window System.";
const XPM_DESC: &str = "X PixMap format, similar to XBM, but supports color. It's used for simple graphics in the X Window System.";

/// Recognized output format identifiers with a human-readable description.
pub const AVAILABLE_FORMATS: &[(&str, &str)] = &[
    ("png", PNG_DESC),
    ("jpeg", JPEG_DESC),
    ("gif", GIF_DESC),
    ("tiff", TIFF_DESC),
    ("bmp", BMP_DESC),
    ("webp", WEBP_DESC),
    ("pdf", PDF_DESC),
    ("psd", PSD_DESC),
    ("eps", EPS_DESC),
    ("ico", ICO_DESC),
    ("icns", ICNS_DESC),
    ("apng", PNG_DESC),
    ("jfif", JPEG_DESC),
    ("mpg", MPEG_DESC),
    ("mpeg", MPEG_DESC),
    ("tif", TIFF_DESC),
    ("msp", MSP_DESC),
    ("pbm", NETPBM_DESC),
    ("pgm", NETPBM_DESC),
    ("ppm", NETPBM_DESC),
    ("pnm", NETPBM_DESC),
    ("pfm", NETPBM_DESC),
    ("blp", BLP_DESC),
    ("dib", BMP_DESC),
    ("bufr", BUFR_DESC),
    ("cur", CUR_DESC),
    ("pcx", PCX_DESC),
    ("dcx", PCX_DESC),
    ("dds", DDS_DESC),
    ("fit", FITS_DESC),
    ("fits", FITS_DESC),
    ("fli", FLI_DESC),
    ("flc", FLI_DESC),
    ("ftc", FTEX_DESC),
    ("ftu", FTEX_DESC),
    ("gbr", GBR_DESC),
    ("grib", GRIB_DESC),
    ("h5", HDF_DESC),
    ("hdf", HDF_DESC),
    ("jp2", JP2_DESC),
    ("j2k", JP2_DESC),
    ("jpc", JP2_DESC),
    ("jpf", JP2_DESC),
    ("jpx", JP2_DESC),
    ("j2c", JP2_DESC),
    ("im", IM_DESC),
    ("iim", IIM_DESC),
    ("mpo", MPO_DESC),
    ("palm", PALM_DESC),
    ("pcd", PCD_DESC),
    ("pxr", PXR_DESC),
    ("qoi", QOI_DESC),
    ("bw", SGI_DESC),
    ("rgb", SGI_DESC),
    ("rgba", SGI_DESC),
    ("sgi", SGI_DESC),
    ("ras", RAS_DESC),
    ("tga", TGA_DESC),
    ("icb", TGA_DESC),
    ("vda", TGA_DESC),
    ("vst", TGA_DESC),
    ("wmf", WMF_DESC),
    ("emf", WMF_DESC),
    ("xbm", XBM_DESC),
    ("xpm", XPM_DESC),
];

/// Whether `id` (matched lowercase) is a recognized format identifier.
pub fn is_supported(id: &str) -> bool {
    AVAILABLE_FORMATS
        .iter()
        .any(|(known, _)| known.eq_ignore_ascii_case(id))
}

/// Description of a recognized format identifier.
pub fn description(id: &str) -> Option<&'static str> {
    AVAILABLE_FORMATS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(id))
        .map(|(_, description)| *description)
}

/// Validate a user-requested format, falling back to [`DEFAULT_FORMAT`] with
/// a warning when it is not recognized.
pub fn resolve_requested(requested: &str, reporter: &dyn ConversionReporter) -> String {
    let requested = requested.to_ascii_lowercase();
    if is_supported(&requested) {
        requested
    } else {
        reporter.warning(&format!(
            "The format '{requested}' is not supported, using the default format."
        ));
        DEFAULT_FORMAT.to_string()
    }
}
