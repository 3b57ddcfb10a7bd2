//! Built-in names of the report language offered by completion.
//!
//! Each row is `(depth, dotted path, kind[, description])`. `depth` is the
//! number of leading path segments already typed when the entry is offered;
//! `ANY` marks members valid after any value (array helpers, conversions).

use super::catalog::EntryKind::{self, *};

/// Depth sentinel for members that apply to any receiver.
pub(super) const ANY: i32 = -1;

/// One row of the built-in table.
#[derive(Debug, Clone, Copy)]
pub(super) struct Builtin {
    pub depth: i32,
    pub path: &'static str,
    pub kind: EntryKind,
    pub description: Option<&'static str>,
}

const fn entry(depth: i32, path: &'static str, kind: EntryKind) -> Builtin {
    Builtin { depth, path, kind, description: None }
}

const fn described(depth: i32, path: &'static str, kind: EntryKind, description: &'static str) -> Builtin {
    Builtin { depth, path, kind, description: Some(description) }
}

#[rustfmt::skip]
pub(super) static BUILTINS: &[Builtin] = &[
    entry(0, "Atan2", Function),
    entry(0, "Log10", Function),
    entry(0, "Exp", Function),
    entry(0, "Sqrt", Function),
    entry(0, "Sin", Function),
    entry(0, "Asin", Function),
    entry(0, "Cos", Function),
    entry(0, "Tan", Function),
    entry(0, "Abs", Function),
    entry(0, "Argb", Function),
    entry(0, "Max", Function),
    entry(0, "Min", Function),
    entry(0, "Round", Function),
    entry(0, "Truncate", Function),

    entry(0, "False", Constant),
    entry(0, "True", Constant),
    entry(0, "PI", Constant),

    entry(0, "import", Keyword),
    entry(0, "model_shell3d", KeywordNoArgs),
    entry(0, "list_envelopes", KeywordNoArgs),
    entry(0, "explode_envelopes", KeywordNoArgs),

    entry(0, "print", Keyword),
    entry(0, "browse_report", Keyword),
    entry(0, "browse_image", Keyword),
    entry(0, "exportesaxml", Keyword),

    entry(0, "#fli_json", Keyword),
    entry(0, "#fli_report", Keyword),
    entry(0, "#fli_image", Keyword),
    entry(0, "#fli_dxf", Keyword),
    entry(0, "#fli_rtf", Keyword),
    entry(0, "#fli_ifc", Keyword),
    entry(0, "#fli_html", Keyword),
    entry(0, "#fli_esazip", Keyword),

    entry(0, "Math", Module),
    entry(1, "Math.PI", Constant),
    entry(1, "Math.E", Constant),
    entry(1, "Math.ToInteger", Function),
    entry(1, "Math.CylinderFieldBiCubicResamplingAndInterpolation", Object),
    entry(1, "Math.CylinderFieldBiCubic", Object),
    entry(1, "Math.Interval", Function),
    entry(1, "Math.IntervalSet", Function),
    entry(1, "Math.Subtraction", Function),
    entry(1, "Math.Interval1D", Module),
    entry(2, "Math.Interval1D.Union", Function),
    entry(2, "Math.Interval1D.Intersection", Function),
    entry(2, "Math.Interval1D.IsEmptyInterval", Function),
    entry(2, "Math.Interval1D.Empty", Constant),

    entry(0, "CssAlignment", Module),
    entry(1, "CssAlignment.None", Constant),
    entry(1, "CssAlignment.TopLeft", Constant),
    entry(1, "CssAlignment.Top", Constant),
    entry(1, "CssAlignment.TopRight", Constant),
    entry(1, "CssAlignment.Left", Constant),
    entry(1, "CssAlignment.Centre", Constant),
    entry(1, "CssAlignment.Right", Constant),
    entry(1, "CssAlignment.BottomLeft", Constant),
    entry(1, "CssAlignment.Bottom", Constant),
    entry(1, "CssAlignment.BottomRight", Constant),

    entry(0, "VariableSymbol", Object),

    entry(0, "GCS", Module),
    entry(1, "GCS.Rx", Function),
    entry(1, "GCS.Ry", Function),
    entry(1, "GCS.Rz", Function),
    entry(1, "GCS.Tx", Function),
    entry(1, "GCS.Ty", Function),
    entry(1, "GCS.Tz", Function),
    entry(1, "GCS.Origin", Constant),
    entry(1, "GCS.Axes", Constant),
    entry(2, "GCS.Axes.Rx", Function),
    entry(2, "GCS.Axes.Ry", Function),
    entry(2, "GCS.Axes.Rz", Function),
    entry(1, "GCS.GetLCS", EmptyCallFunction),
    entry(2, "GCS.GetLCS().PointToGcs", Function),
    entry(2, "GCS.GetLCS().GcsToLcs", Function),

    entry(0, "Fcs", Module),

    entry(1, "Fcs.Symbol", Module),
    entry(2, "Fcs.Symbol.Pow", Function),
    entry(2, "Fcs.Symbol.Log", Function),
    entry(2, "Fcs.Symbol.Log10", Function),
    entry(2, "Fcs.Symbol.Exp", Function),
    entry(2, "Fcs.Symbol.Max", Function),
    entry(2, "Fcs.Symbol.Min", Function),
    entry(2, "Fcs.Symbol.Abs", Function),
    entry(2, "Fcs.Symbol.Sin", Function),
    entry(2, "Fcs.Symbol.Cos", Function),
    entry(2, "Fcs.Symbol.Tan", Function),
    entry(2, "Fcs.Symbol.Cot", Function),
    entry(2, "Fcs.Symbol.Asin", Function),
    entry(2, "Fcs.Symbol.Acos", Function),
    entry(2, "Fcs.Symbol.Atan", Function),
    entry(2, "Fcs.Symbol.Acotan", Function),
    entry(2, "Fcs.Symbol.Sinh", Function),
    entry(2, "Fcs.Symbol.Cosh", Function),
    entry(2, "Fcs.Symbol.Tanh", Function),
    entry(2, "Fcs.Symbol.Coth", Function),
    entry(2, "Fcs.Symbol.Sqrt", Function),
    entry(2, "Fcs.Symbol.Brace", Function),
    entry(2, "Fcs.Symbol.Constant", Function),
    entry(2, "Fcs.Symbol.Undefined", Constant),
    entry(2, "Fcs.Symbol.Match", Function),
    entry(2, "Fcs.Symbol.Greater", Function),
    entry(2, "Fcs.Symbol.GreaterOrEqual", Function),
    entry(2, "Fcs.Symbol.Between", Function),
    entry(2, "Fcs.Symbol.LessOrEqual", Function),
    entry(2, "Fcs.Symbol.Less", Function),
    entry(2, "Fcs.Symbol.Conditional", Object),
    entry(2, "Fcs.Symbol.Switch", Function),
    entry(2, "Fcs.Symbol.Case", Function),

    entry(1, "Fcs.EngineeringQuantity", Module),
    described(2, "Fcs.EngineeringQuantity.Coefficient", Constant, "coefficient [-]"),
    described(2, "Fcs.EngineeringQuantity.Factor", Constant, "factor [-]"),
    described(2, "Fcs.EngineeringQuantity.Multiplier", Constant, "multiplier [-]"),
    described(2, "Fcs.EngineeringQuantity.FactorPerLength", Constant, "factor per length [1/m]"),
    described(2, "Fcs.EngineeringQuantity.FactorPerArea", Constant, "factor per area [1/m²]"),
    described(2, "Fcs.EngineeringQuantity.StructureSlope", Constant, "structural slope [-]"),
    described(2, "Fcs.EngineeringQuantity.StructureAngle", Constant, "structural angle [-]"),
    described(2, "Fcs.EngineeringQuantity.Slope", Constant, "slope [-]"),
    described(2, "Fcs.EngineeringQuantity.Angle", Constant, "angle [-]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionAngle", Constant, "cross section angle [-]"),
    described(2, "Fcs.EngineeringQuantity.Length", Constant, "length [m]"),
    described(2, "Fcs.EngineeringQuantity.Area", Constant, "area [m²]"),
    described(2, "Fcs.EngineeringQuantity.Volume", Constant, "volume [m³]"),
    described(2, "Fcs.EngineeringQuantity.StructureLength", Constant, "structural length [m]"),
    described(2, "Fcs.EngineeringQuantity.DoorLength", Constant, "door length [m]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionLength", Constant, "cross section length [m]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionArea", Constant, "cross section area [m²]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionModulus", Constant, "cross section modulus [m³]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionInertia", Constant, "cross section inertia [m⁴]"),
    described(2, "Fcs.EngineeringQuantity.CrossSectionWarpInertia", Constant, "cross section inertia in warping [m⁶]"),
    described(2, "Fcs.EngineeringQuantity.Force", Constant, "force [kgm/s²]"),
    described(2, "Fcs.EngineeringQuantity.BeamInternalForce", Constant, "beam internal force [kgm/s²]"),
    described(2, "Fcs.EngineeringQuantity.BeamBendingMoment", Constant, "beam bending moment [kgm²/s²]"),
    described(2, "Fcs.EngineeringQuantity.ShellInternalForce", Constant, "shell internal force [kg/s²]"),
    described(2, "Fcs.EngineeringQuantity.ShellBendingMoment", Constant, "shell bending moment [kgm/s²]"),
    described(2, "Fcs.EngineeringQuantity.LoadForce", Constant, "load force [kgm/s²]"),
    described(2, "Fcs.EngineeringQuantity.LoadMoment", Constant, "load moment [kgm²/s²]"),
    described(2, "Fcs.EngineeringQuantity.LoadForcePerLength", Constant, "load force per length intensity [kg/s²]"),
    described(2, "Fcs.EngineeringQuantity.LoadMomentPerLength", Constant, "load moment per length intensity [kgm/s²]"),
    described(2, "Fcs.EngineeringQuantity.LoadForcePerArea", Constant, "load force per area intensity [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.MassDensity", Constant, "volumetric mass density [kg/m³]"),
    described(2, "Fcs.EngineeringQuantity.Mass", Constant, "mass [kg]"),
    described(2, "Fcs.EngineeringQuantity.Speed", Constant, "speed [m/s]"),
    described(2, "Fcs.EngineeringQuantity.Velocity", Constant, "velocity [m/s]"),
    described(2, "Fcs.EngineeringQuantity.Acceleration", Constant, "acceleration [m/s²]"),
    described(2, "Fcs.EngineeringQuantity.SpecificWeight", Constant, "specific weight [kg/m²s²]"),
    described(2, "Fcs.EngineeringQuantity.Pressure", Constant, "pressure [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.Stress", Constant, "stress [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.MaterialStrength", Constant, "material strenght [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.MaterialYieldLimit", Constant, "material yield strenght [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.MaterialUltimateLimit", Constant, "material ultimate strenght [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.MaterialElasticModulus", Constant, "material modulus of elasticity [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.Time", Constant, "time [s]"),
    described(2, "Fcs.EngineeringQuantity.ConcreteAge", Constant, "concrete age [s]"),
    described(2, "Fcs.EngineeringQuantity.Displacement", Constant, "displacement [m]"),
    described(2, "Fcs.EngineeringQuantity.Rotation", Constant, "rotation [-]"),
    described(2, "Fcs.EngineeringQuantity.DeformationTorque", Constant, "torque deformation [1/m]"),
    described(2, "Fcs.EngineeringQuantity.Curvature", Constant, "curvature [1/m]"),
    described(2, "Fcs.EngineeringQuantity.DeformationEnergy", Constant, "deformation energy [kgm²/s²]"),
    described(2, "Fcs.EngineeringQuantity.EnergyDensity", Constant, "energy density [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.DeformationStrain", Constant, "strain [-]"),
    described(2, "Fcs.EngineeringQuantity.FluidVelocity", Constant, "fluid velocity [m/s]"),
    described(2, "Fcs.EngineeringQuantity.FluidVorticity", Constant, "fluid vorticity [1/s]"),
    described(2, "Fcs.EngineeringQuantity.FluidPressure", Constant, "fluid pressure [kg/ms²]"),
    described(2, "Fcs.EngineeringQuantity.Temperature", Constant, "temperature [K]"),
    described(2, "Fcs.EngineeringQuantity.HeatFlux", Constant, "heat flux [kg/s³})]"),

    entry(0, "Unit", Module),
    described(1, "Unit.List", Property, "List of units"),
    described(1, "Unit.rad", Constant, "[radian] (1 rad = 1 )"),
    described(1, "Unit.mrad", Constant, "[miliradian] (1 mrad = 0.001 )"),
    described(1, "Unit.deg", Constant, "[degree] (1 deg = 0.0174532925199433 )"),
    described(1, "Unit.grad", Constant, "[grad] (1 grad = 0.015707963267949 )"),
    described(1, "Unit.m", Constant, "[metre] (1 m = 1 m)"),
    described(1, "Unit.nm", Constant, "[nanometre] (1 nm = 1E-09 m)"),
    described(1, "Unit.mm", Constant, "[milimetre] (1 mm = 0.001 m)"),
    described(1, "Unit.cm", Constant, "[centimetre] (1 cm = 0.01 m)"),
    described(1, "Unit.km", Constant, "[kilometre] (1 km = 1000 m)"),
    described(1, "Unit.in", Constant, "[inch] (1 in = 0.0254 m)"),
    described(1, "Unit.ft", Constant, "[feet] (1 ft = 0.3048 m)"),
    described(1, "Unit.m2", Constant, "[metre square] (1 m² = 1 m²)"),
    described(1, "Unit.mm2", Constant, "[milimetre square] (1 mm² = 1E-06 m²)"),
    described(1, "Unit.cm2", Constant, "[centimetre square] (1 cm² = 0.0001 m²)"),
    described(1, "Unit.in2", Constant, "[inch square] (1 in² = 0.00064516 m²)"),
    described(1, "Unit.m3", Constant, "[cubic metre] (1 m³ = 1 m³)"),
    described(1, "Unit.mm3", Constant, "[cubic milimetre] (1 mm³ = 1E-09 m³)"),
    described(1, "Unit.cm3", Constant, "[cubic centimetre] (1 cm³ = 1E-06 m³)"),
    described(1, "Unit.in3", Constant, "[cubic inch] (1 in³ = 1.6387064E-05 m³)"),
    described(1, "Unit.ft3", Constant, "[cubic foot] (1 ft³ = 0.028316846592 m³)"),
    described(1, "Unit.bsh", Constant, "[bushel] (1 bsh = 0.035239072 m³)"),
    described(1, "Unit.l", Constant, "[litre] (1 l = 0.001 m³)"),
    described(1, "Unit.N", Constant, "[newton] (1 N = 1 kgm/s²)"),
    described(1, "Unit.kN", Constant, "[kilonewton] (1 kN = 1000 kgm/s²)"),
    described(1, "Unit.MN", Constant, "[meganewton] (1 MN = 1000000 kgm/s²)"),
    described(1, "Unit.kp", Constant, "[kilopond] (1 kp = 9.80665 kgm/s²)"),
    described(1, "Unit.lbf", Constant, "[pound-force] (1 lbf = 4.44822162 kgm/s²)"),
    described(1, "Unit.kip", Constant, "[kilopound] (1 kip = 4448.22162 kgm/s²)"),
    described(1, "Unit.Nm", Constant, "[newtonmetre] (1 Nm = 1 kgm²/s²)"),
    described(1, "Unit.kNm", Constant, "[kilonewtonmetre] (1 kNm = 1000 kgm²/s²)"),
    described(1, "Unit.MNm", Constant, "[meganewtonmetre] (1 MNm = 1000000 kgm²/s²)"),
    described(1, "Unit.lbfin", Constant, "[inch-pound] (1 lbfin = 0.112984829148 kgm²/s²)"),
    described(1, "Unit.lbfft", Constant, "[foot-pound] (1 lbfft = 1.355817949776 kgm²/s²)"),
    described(1, "Unit.kipft", Constant, "[foot-kilopound] (1 kipft = 1355.817949776 kgm²/s²)"),
    described(1, "Unit.Pa", Constant, "[pascal] (1 Pa = 1 kg/ms²)"),
    described(1, "Unit.kPa", Constant, "[kilopascal] (1 kPa = 1000 kg/ms²)"),
    described(1, "Unit.MPa", Constant, "[megapascal] (1 MPa = 1000000 kg/ms²)"),
    described(1, "Unit.psi", Constant, "[pound per square inch] (1 psi = 6894.8 kg/ms²)"),
    described(1, "Unit.psf", Constant, "[pound per square feet] (1 psf = 47.8802595 kg/ms²)"),
    described(1, "Unit.ksi", Constant, "[kilo-pound per square inch] (1 ksi = 6894800 kg/ms²)"),
    described(1, "Unit.N_m", Constant, "[newton per meter] (1 N·m = 1 kg/s²)"),
    described(1, "Unit.kN_m", Constant, "[kilonewton per meter] (1 kN/m = 1000 kg/s²)"),
    described(1, "Unit.N_m2", Constant, "[newton per square meter] (1 N/m² = 1000 kg/ms²)"),
    described(1, "Unit.kN_m2", Constant, "[kilonewton per square meter] (1 kN/m² = 1000 kg/ms²)"),
    described(1, "Unit.kg", Constant, "[kilogram] (1 kg = 1 kg)"),
    described(1, "Unit.gr", Constant, "[gram] (1 gr = 0.001 kg)"),
    described(1, "Unit.t", Constant, "[metric ton] (1 t = 1000 kg)"),
    described(1, "Unit.lbm", Constant, "[pound-mass] (1 lbm = 0.45359237 kg)"),
    described(1, "Unit.kg_m3", Constant, "[kilogram per cubic metre] (1 kg/m³ = 1 kg/m³)"),
    described(1, "Unit.t_m3", Constant, "[ton per cubic metre] (1 t/m³ = 1000 kg/m³)"),
    described(1, "Unit.kg_l ", Constant, "[kilogram per litre] (1 kg/l  = 1000 kg/m³)"),
    described(1, "Unit.lbm_ft3", Constant, "[poud per cubic foot] (1 lbm/ft³ = 16.0184633739601 kg/m³)"),
    described(1, "Unit.s", Constant, "[second] (1 s = 1 s)"),
    described(1, "Unit.ms", Constant, "[milisecond] (1 ms = 0.001 s)"),
    described(1, "Unit.min", Constant, "[minute] (1 min = 60 s)"),
    described(1, "Unit.hr", Constant, "[hour] (1 hr = 3600 s)"),
    described(1, "Unit.day", Constant, "[day] (1 day = 86400 s)"),
    described(1, "Unit.week", Constant, "[week] (1 week = 604800 s)"),
    described(1, "Unit.A", Constant, "[ampere] (1 A = 1 A)"),
    described(1, "Unit.mA", Constant, "[miliampere] (1 mA = 0.001 A)"),
    described(1, "Unit.kA", Constant, "[kiloampere] (1 kA = 1000 A)"),
    described(1, "Unit.C", Constant, "[degree of celsius] (1 C = 1 K)"),
    described(1, "Unit.K", Constant, "[kelvin] (1 K = 1 K)"),
    described(1, "Unit.F", Constant, "[fahrenheit] (1 F = 0.555555555555556 K)"),
    described(1, "Unit.R", Constant, "[rankine] (1 R = 0.555555555555556 K)"),
    described(1, "Unit.mol", Constant, "[mole] (1 mol = 1 mol)"),
    described(1, "Unit.cd", Constant, "[candela] (1 cd = 1 cd)"),
    described(1, "Unit.m_s", Constant, "[metre per second] (1 m/s = 1 m/s)"),
    described(1, "Unit.km_h", Constant, "[kilometre per hour] (1 km/h = 0.277777777777778 m/s)"),
    described(1, "Unit.g", Constant, "[gravitational acceleration] (1 g = 9.80665 m/s²)"),
    described(1, "Unit.m_s2", Constant, "[metre per second squared] (1 m/s² = 1 m/s²)"),

    entry(1, "Fcs.Units", Module),
    entry(2, "Fcs.Units.Setup", Function),
    entry(2, "Fcs.Units.DefaultSI", Constant),
    entry(2, "Fcs.Units.DefaultFEM", Constant),
    entry(2, "Fcs.Units.DefaultSteel", Constant),
    entry(2, "Fcs.Units.DefaultImperialUS", Constant),

    entry(1, "Fcs.Drawing", Module),
    entry(2, "Fcs.Drawing.Rgb", Function),
    entry(2, "Fcs.Drawing.Argb", Function),

    entry(1, "Fcs.Profiling", Module),
    entry(2, "Fcs.Profiling.StartExpressionProfiler", EmptyCallFunction),
    entry(2, "Fcs.Profiling.StopExpressionProfiler", EmptyCallFunction),

    entry(1, "Fcs.Process", Module),
    entry(2, "Fcs.Process.LaunchExe", Function),
    entry(2, "Fcs.Process.Function", Function),

    entry(1, "Fcs.Types", Module),
    entry(2, "Fcs.Types.Array", Function),

    entry(1, "Fcs.Geometry", Module),
    entry(2, "Fcs.Geometry.Vertex3D", Function),
    entry(2, "Fcs.Geometry.Point3D", Function),
    entry(2, "Fcs.Geometry.Vector3D", Function),
    entry(2, "Fcs.Geometry.Matrix33", Function),
    entry(2, "Fcs.Geometry.Tools", Module),
    entry(3, "Fcs.Geometry.Tools.CreateDefaultLcsByTwoPoints", Function),
    entry(3, "Fcs.Geometry.Tools.CreateDefaultLcsByTwoPointsAndZ", Function),
    entry(3, "Fcs.Geometry.Tools.GetLinesIntersection", Function),
    entry(3, "Fcs.Geometry.Tools.GetLinesIntersection2", Function),
    entry(3, "Fcs.Geometry.Tools.CreateDefaultMatrixByVectorX", Function),
    entry(2, "Fcs.Geometry.Measure", Module),
    entry(3, "Fcs.Geometry.Measure.OrientedAngleOfVectors", Function),
    entry(3, "Fcs.Geometry.Measure.PositiveOrientedAngleOfVectors", Function),
    entry(3, "Fcs.Geometry.Measure.AngleOfVectors", Function),
    entry(3, "Fcs.Geometry.Measure.DistanceOfPoints", Function),
    entry(3, "Fcs.Geometry.Measure.DistanceOfPointFromPlane", Function),
    entry(2, "Fcs.Geometry.BoundingBox", Function),
    entry(2, "Fcs.Geometry.Lcs", Function),
    entry(2, "Fcs.Geometry.Intersection", Module),
    entry(3, "Fcs.Geometry.Intersection.LineAndPlane", Function),
    entry(3, "Fcs.Geometry.Intersection.Lines2", Function),
    entry(3, "Fcs.Geometry.Intersection.Lines", Function),
    entry(3, "Fcs.Geometry.Intersection.PointAndArea", Function),
    entry(2, "Fcs.Geometry.Boolean2D", Module),
    entry(3, "Fcs.Geometry.Boolean2D.Subtract", Function),
    entry(3, "Fcs.Geometry.Boolean2D.Intersect", Function),
    entry(3, "Fcs.Geometry.Boolean2D.Add", Function),

    entry(1, "Fcs.Converters", Module),
    entry(2, "Fcs.Converters.StringToMd5Hash", Function),
    entry(2, "Fcs.Converters.IntegerToRomanic", Function),
    entry(2, "Fcs.Converters.ByteArrayToBase64", Function),
    entry(2, "Fcs.Converters.EnumerableRange", Function),
    entry(2, "Fcs.Converters.ToSequence", Function),
    entry(2, "Fcs.Converters.ToArray", Function),
    entry(2, "Fcs.Converters.ToJson", Function),
    entry(2, "Fcs.Converters.ParseJson", Function),

    entry(1, "Fcs.Object", Module),
    entry(2, "Fcs.Object.HasProperty", Function),
    entry(2, "Fcs.Object.HasPropertyValue", Function),
    entry(2, "Fcs.Object.HasPropertyChainValue", Function),
    entry(2, "Fcs.Object.FindProperty", Function),
    entry(2, "Fcs.Object.FindPropertyChainValue", Function),

    entry(1, "Fcs.Beam", Module),
    entry(2, "Fcs.Beam.Hinges", Object),
    entry(2, "Fcs.Beam.Hinges.None", Property),
    entry(2, "Fcs.Beam.Hinges.Braces", Property),
    entry(2, "Fcs.Beam.Hinge", Module),
    entry(3, "Fcs.Beam.Hinge.Nx", Property),
    entry(3, "Fcs.Beam.Hinge.Vy", Property),
    entry(3, "Fcs.Beam.Hinge.Vz", Property),
    entry(3, "Fcs.Beam.Hinge.Mx", Property),
    entry(3, "Fcs.Beam.Hinge.My", Property),
    entry(3, "Fcs.Beam.Hinge.Mz", Property),
    entry(3, "Fcs.Beam.Hinge.SemiNx", Function),
    entry(3, "Fcs.Beam.Hinge.SemiVy", Function),
    entry(3, "Fcs.Beam.Hinge.SemiVz", Function),
    entry(3, "Fcs.Beam.Hinge.SemiMx", Function),
    entry(3, "Fcs.Beam.Hinge.SemiMy", Function),
    entry(3, "Fcs.Beam.Hinge.SemiMz", Function),

    entry(3, "Fcs.Beam.Hinge.None", Property),
    entry(3, "Fcs.Beam.Hinge.Full", Property),
    entry(3, "Fcs.Beam.Hinge.Bend", Property),
    entry(3, "Fcs.Beam.Hinge.FreeRotation", Function),
    entry(3, "Fcs.Beam.Hinge.General", Function),
    entry(3, "Fcs.Beam.Hinge.Dof", Module),
    entry(4, "Fcs.Beam.Hinge.Dof.Free", Property),
    entry(4, "Fcs.Beam.Hinge.Dof.Stiff", Property),
    entry(4, "Fcs.Beam.Hinge.Dof.Semistiff", Function),

    entry(1, "Fcs.Analysis", Module),
    entry(2, "Fcs.Analysis.BeamSection", Module),
    entry(3, "Fcs.Analysis.BeamSection.CharacteristicsSolver", Function),
    entry(2, "Fcs.Analysis.ResultCase", Function),
    entry(2, "Fcs.Analysis.ResultMonitor.New", Function),
    entry(2, "Fcs.Analysis.Monitor", Function),
    entry(2, "Fcs.Analysis.Result", Module),
    entry(3, "Fcs.Analysis.Result.Beam", Module),

    entry(4, "Fcs.Analysis.Result.Beam.N", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.Vy", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.Vz", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.Mx", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.My", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.My_mid", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.Mz", Constant),
    entry(4, "Fcs.Analysis.Result.Beam.Mz_mid", Constant),

    entry(4, "Fcs.Analysis.Result.Beam.Central", Module),
    entry(5, "Fcs.Analysis.Result.Beam.Central.N", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.Vy", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.Vz", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.Mx", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.My", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.Mz", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.My_mid", Constant),
    entry(5, "Fcs.Analysis.Result.Beam.Central.Mz_mid", Constant),

    entry(3, "Fcs.Analysis.Result.Displacement", Module),
    entry(4, "Fcs.Analysis.Result.Displacement.X", Constant),
    entry(4, "Fcs.Analysis.Result.Displacement.Y", Constant),
    entry(4, "Fcs.Analysis.Result.Displacement.Z", Constant),
    entry(4, "Fcs.Analysis.Result.Displacement.Total", Constant),

    entry(3, "Fcs.Analysis.Result.Rotation", Module),
    entry(4, "Fcs.Analysis.Result.Rotation.X", Constant),
    entry(4, "Fcs.Analysis.Result.Rotation.Y", Constant),
    entry(4, "Fcs.Analysis.Result.Rotation.Z", Constant),
    entry(4, "Fcs.Analysis.Result.Rotation.Total", Constant),

    entry(1, "Fcs.Reporting", Module),
    entry(2, "Fcs.Reporting.Setup", Object),
    entry(2, "Fcs.Reporting.Document", Object),
    entry(2, "Fcs.Reporting.Chapter", Object),
    entry(2, "Fcs.Reporting.Paragraph", Function),
    entry(2, "Fcs.Reporting.Text", Function),
    entry(2, "Fcs.Reporting.Html", Function),
    entry(2, "Fcs.Reporting.Symbol", Function),
    entry(2, "Fcs.Reporting.LocalizedText", Function),
    entry(2, "Fcs.Reporting.Table", Object),
    entry(2, "Fcs.Reporting.Table.Row", Function),
    entry(2, "Fcs.Reporting.Image", Object),
    entry(2, "Fcs.Reporting.RendererHtml", Function),
    entry(2, "Fcs.Reporting.RendererText", Object),

    entry(1, "Fcs.Diagnostics", Module),
    entry(2, "Fcs.Diagnostics.Format", Function),
    entry(2, "Fcs.Diagnostics.Clock", Function),
    entry(2, "Fcs.Diagnostics.Clock2", Function),
    entry(2, "Fcs.Diagnostics.TestSuite", Object),
    entry(2, "Fcs.Diagnostics.Test", Function),
    entry(2, "Fcs.Diagnostics.TraceDepth", Module),
    entry(3, "Fcs.Diagnostics.TraceDepth.None", Constant),
    entry(3, "Fcs.Diagnostics.TraceDepth.Firm", Constant),
    entry(3, "Fcs.Diagnostics.TraceDepth.Info", Constant),
    entry(3, "Fcs.Diagnostics.TraceDepth.Trace", Constant),
    entry(3, "Fcs.Diagnostics.TraceDepth.Debug", Constant),

    entry(1, "Fcs.Presentation", Module),
    entry(2, "Fcs.Presentation.DxfUpdateRenderer", Object),
    entry(2, "Fcs.Presentation.ImageRenderer", Object),

    entry(1, "Fcs.Web", Module),
    entry(2, "Fcs.Web.RestClient", Object),

    entry(1, "Fcs.Assembly", Module),
    entry(2, "Fcs.Assembly.All", Constant),
    entry(2, "Fcs.Assembly.AllMembers", Constant),
    entry(2, "Fcs.Assembly.AllBeams", Constant),
    entry(2, "Fcs.Assembly.AllShells", Constant),
    entry(2, "Fcs.Assembly.AllVertexSupports", Constant),
    entry(2, "Fcs.Assembly.ByName", Function),
    entry(2, "Fcs.Assembly.BeamByName", Function),
    entry(2, "Fcs.Assembly.BeamByPath", Function),
    entry(2, "Fcs.Assembly.BeamNameAndRelativeInterval", Function),
    entry(2, "Fcs.Assembly.BeamNameAndAbsoluteInterval", Function),
    entry(2, "Fcs.Assembly.BeamsWithCrossSectionName", Function),
    entry(2, "Fcs.Assembly.BeamsByLayer", Function),
    entry(2, "Fcs.Assembly.ShellsByLayer", Function),
    entry(2, "Fcs.Assembly.BeamsInLayer", Function),
    entry(2, "Fcs.Assembly.ShellsInLayer", Function),
    entry(2, "Fcs.Assembly.MembersInLayer", Function),
    entry(2, "Fcs.Assembly.MembersInLayers", Function),
    entry(2, "Fcs.Assembly.MembersInLayers", Function),
    entry(2, "Fcs.Assembly.BeamsInLayers", Function),
    entry(2, "Fcs.Assembly.ShellsInLayers", Function),
    entry(2, "Fcs.Assembly.Union", Function),
    entry(2, "Fcs.Assembly.BucketDefinition", Object),
    entry(2, "Fcs.Assembly.Collector", Object),

    entry(1, "Fcs.Action", Module),
    entry(2, "Fcs.Action.Class", Object),
    entry(2, "Fcs.Action.LoadCombination", Object),
    entry(2, "Fcs.Action.LoadCase", Object),
    entry(2, "Fcs.Action.ResultClass", Object),

    entry(1, "Fcs.IntensitySystem", Module),
    entry(2, "Fcs.IntensitySystem.WorldGcs", Constant),
    entry(2, "Fcs.IntensitySystem.Gcs", Constant),
    entry(2, "Fcs.IntensitySystem.LoadLcs", Constant),
    entry(2, "Fcs.IntensitySystem.SurfaceLcs", Constant),

    entry(1, "Fcs.Mesh", Module),
    entry(2, "Fcs.Mesh.ConnectRules", Module),
    entry(3, "Fcs.Mesh.ConnectRules.ConnectClub", Object),
    entry(3, "Fcs.Mesh.ConnectRules.WeldNodes", Object),
    entry(3, "Fcs.Mesh.ConnectRules.HangingNodes", Object),
    entry(2, "Fcs.Mesh.Element", Module),
    entry(3, "Fcs.Mesh.Element.Quadrilateral", Constant),
    entry(3, "Fcs.Mesh.Element.TrianglePair", Constant),

    entry(1, "Fcs.Parameter", Module),
    entry(2, "Fcs.Parameter.ListType", Function),
    entry(2, "Fcs.Parameter.ListTypeOption", Object),
    entry(2, "Fcs.Parameter.ItemDouble", Object),
    entry(2, "Fcs.Parameter.ItemInteger", Object),
    entry(2, "Fcs.Parameter.ItemArray", Object),
    entry(2, "Fcs.Parameter.ItemList", Object),
    entry(2, "Fcs.Parameter.ItemAction", Object),
    entry(2, "Fcs.Parameter.ItemString", Object),
    entry(2, "Fcs.Parameter.ItemClass", Constant),
    entry(2, "Fcs.Parameter.ItemComment", Constant),

    entry(1, "Fcs.Exception", Module),
    entry(2, "Fcs.Exception.Throw", Function),

    entry(0, "Fcm", Module),
    entry(1, "Fcm.Mesh", Module),
    entry(2, "Fcm.Mesh.ConnectRules", Constant),
    entry(2, "Fcm.Mesh.AutoConnect", Constant),
    entry(2, "Fcm.Mesh.WeldNodes", Constant),
    entry(2, "Fcm.Mesh.ElementSize", Constant),
    entry(2, "Fcm.Mesh.DefaultElementType2D", Constant),
    entry(1, "Fcm.GetAnalysis", Function),
    entry(1, "Fcm.GetFileNamePath", Function),
    entry(1, "Fcm.ResourceReader", Module),
    entry(2, "Fcm.ResourceReader.ReadAsBase64", Function),
    entry(2, "Fcm.ResourceReader.ReadAsString", Function),
    entry(2, "Fcm.ResourceReader.ReadJsonAsDynamicObject", Function),
    entry(2, "Fcm.ResourceReader.ReadJsonAsDynamicObjectArray", Function),
    entry(2, "Fcm.ResourceReader.ReadGridValues", Function),
    entry(2, "Fcm.ResourceReader.Path", Function),

    entry(ANY, "ToString", EmptyCallFunction),

    described(ANY, "Select", Function, "Array function"),
    described(ANY, "SelectIterate", Function, "Array function"),
    described(ANY, "SelectMany", Function, "Array function"),
    described(ANY, "SelectManyFn", Function, "Array function"),
    described(ANY, "Aggregate", Function, "Array function"),
    described(ANY, "AggregateIterate", Function, "Array function"),
    described(ANY, "Max", Function, "Array function"),
    described(ANY, "MaxBy", Function, "Array function"),
    described(ANY, "IndexOfMax", Function, "Array function"),
    described(ANY, "Min", Function, "Array function"),
    described(ANY, "MinBy", Function, "Array function"),
    described(ANY, "IndexOfMin", Function, "Array function"),
    described(ANY, "OrderByAscending", Function, "Array function"),
    described(ANY, "OrderByAscendingMore", Function, "Array function"),
    described(ANY, "OrderByDescending", Function, "Array function"),
    described(ANY, "OrderByDescendingMore", Function, "Array function"),
    described(ANY, "Where", Function, "Array function"),
    described(ANY, "Find", Function, "Array function"),
    described(ANY, "FindOrDefault", Function, "Array function"),
    described(ANY, "Take", Function, "Array function"),
    described(ANY, "Skip", Function, "Array function"),
    described(ANY, "Reverse", EmptyCallFunction, "Array function"),
    described(ANY, "Zip", Function, "Array function"),
    described(ANY, "CollectBy", Function, "Array function"),
    described(ANY, "CumulativeSums", Constant, "Array function"),
    described(ANY, "Sum", Constant, "Array function"),
    described(ANY, "SumItems", Function, "Array function"),
    described(ANY, "Buckets", Constant, "Array function"),
    described(ANY, "IsEmpty", Constant, "Array function"),
    described(ANY, "Count", Constant, "Array function"),
    described(ANY, "Empty", Constant, "Array function"),
    described(ANY, "GetSpacings", Function, "Array function"),
    described(ANY, "GetCumulativeSums", Function, "Array function"),
    described(ANY, "Any", Function, "Array function"),
    described(ANY, "All", Function, "Array function"),
    described(ANY, "Mul", Function, "Array function"),
    described(ANY, "MultiplyElements", Function, "Array function"),
    described(ANY, "MaskedSpanSums", Function, "Array function"),
    described(ANY, "MergeDoubles", Function, "Array function"),
    described(ANY, "JoinStrings", Function, "Array string function"),
    described(ANY, "JoinStringsWith", Function, "Array string function"),
    described(ANY, "JoinStringsFn", Function, "Array string function"),
    described(ANY, "JoinStringsWithFn", Function, "Array string function"),

    described(ANY, "Substring", Function, "String function"),
    described(ANY, "Contains", Function, "String function"),
    described(ANY, "EndsWith", Function, "String function"),
    described(ANY, "IndexOf", Function, "String function"),
    described(ANY, "LastIndexOf", Function, "String function"),
    described(ANY, "Trim", EmptyCallFunction, "String function"),
    described(ANY, "Insert", Function, "String function"),
    described(ANY, "Replace", Function, "String function"),
    described(ANY, "Remove", Function, "String function"),
    described(ANY, "ToLower", EmptyCallFunction, "String function"),
    described(ANY, "ToUpper", EmptyCallFunction, "String function"),
    described(ANY, "StartsWith", Function, "String function"),
    described(ANY, "PadLeft", Function, "String function"),
    described(ANY, "PadRight", Function, "String function"),
    described(ANY, "Length", Constant, "String function"),

    entry(1, "Fcs.SteelLib", Module),

    entry(2, "Fcs.SteelLib.Design", Module),
    entry(3, "Fcs.SteelLib.Design.BendingAxial.RunBendingAxialCheck", Function),
    entry(3, "Fcs.SteelLib.Design.Buckling.RunBucklingCheckY", Function),
    entry(3, "Fcs.SteelLib.Design.Buckling.RunBucklingCheckZ", Function),
    entry(3, "Fcs.SteelLib.Design.Compression.RunCompressionCheck", Function),
    entry(3, "Fcs.SteelLib.Design.Moment.RunMomentAxisCheck", Function),
    entry(3, "Fcs.SteelLib.Design.Moment.RunMomentCheck", Function),
    entry(3, "Fcs.SteelLib.Design.Shear.RunShearCheckY", Function),
    entry(3, "Fcs.SteelLib.Design.Shear.RunShearCheckZ", Function),
    entry(3, "Fcs.SteelLib.Design.Tension.RunTensionCheck", Function),

    entry(2, "Fcs.SteelLib.Sections", Module),
    entry(3, "Fcs.SteelLib.Sections.CircleSection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.CircleSection.GetPropertiesCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.CircleSection.GetPropertiesTube", Function),
    entry(3, "Fcs.SteelLib.Sections.CircleSection.GetPropertiesTubeCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.Csection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.Csection.GetPropertiesCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.IpeSection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.IpeSection.GetPropertiesCustomMateria", Function),
    entry(3, "Fcs.SteelLib.Sections.Materials.CreateNormalMaterialProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.Properties.ByName", Function),
    entry(3, "Fcs.SteelLib.Sections.RectangleSection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.RectangleSection.GetPropertiesCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.RibSection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.RibSection.GetPropertiesWithZet", Function),
    entry(3, "Fcs.SteelLib.Sections.Shape.GetZet", Function),
    entry(3, "Fcs.SteelLib.Sections.ThinSection.CombineGeometries", Function),
    entry(3, "Fcs.SteelLib.Sections.ThinSection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.ThinSection.Reflection", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.CreateGeometry", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.CreateGeometryCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.CreateSection", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesCC12", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesCC30", Constant),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesLee", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesLeeCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesRhs", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesRhsCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesStiffener", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetPropertiesStiffenerLam", Function),
    entry(3, "Fcs.SteelLib.Sections.UniversalThinSection.GetSectionStiffener", Function),
    entry(3, "Fcs.SteelLib.Sections.Usection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.Usection.GetPropertiesCustomMaterial", Function),
    entry(3, "Fcs.SteelLib.Sections.Zsection.GetProperties", Function),
    entry(3, "Fcs.SteelLib.Sections.Zsection.GetPropertiesLaminate", Function),
    entry(3, "Fcs.SteelLib.Sections.Zsection.GetSection", Function),
    entry(3, "Fcs.SteelLib.Sections.Zsection.GetSectionCustomMaterial", Function),
];
